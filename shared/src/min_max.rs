use glam::{I16Vec3, IVec3, Vec3};

/// Some volume defined by a minimum and maximum.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinMax<T> {
	pub min: T,
	pub max: T,
}

impl<T> MinMax<T> where T: Clone {
	pub fn new(a: T) -> Self {
		Self { min: a.clone(), max: a }
	}
}

/// Component-wise minimum and maximum.
pub trait Extent: Copy {
	fn min_with(self, other: Self) -> Self;
	fn max_with(self, other: Self) -> Self;
}

macro_rules! impl_extent_glam {
	($($type:ty),*) => {
		$(
			impl Extent for $type {
				fn min_with(self, other: Self) -> Self { self.min(other) }
				fn max_with(self, other: Self) -> Self { self.max(other) }
			}
		)*
	};
}

macro_rules! impl_extent_ord {
	($($type:ty),*) => {
		$(
			impl Extent for $type {
				fn min_with(self, other: Self) -> Self { Ord::min(self, other) }
				fn max_with(self, other: Self) -> Self { Ord::max(self, other) }
			}
		)*
	};
}

impl_extent_glam!(I16Vec3, IVec3, Vec3);
impl_extent_ord!(u8, i16, u16, i32, u32);

impl<T> MinMax<T> where T: Extent {
	pub fn update(&mut self, a: T) {
		self.min = self.min.min_with(a);
		self.max = self.max.max_with(a);
	}
}

pub trait MinMaxFromIterator: Iterator {
	fn min_max(self) -> Option<MinMax<Self::Item>>;
}

impl<I> MinMaxFromIterator for I where I: Iterator, I::Item: Extent {
	fn min_max(mut self) -> Option<MinMax<Self::Item>> {
		let mut min_max = MinMax::new(self.next()?);
		for a in self {
			min_max.update(a);
		}
		Some(min_max)
	}
}
