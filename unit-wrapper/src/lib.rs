//! Zero-cost newtypes that tag a numeric value with a physical unit.
//!
//! The [unit_wrapper] macro declares a generic tuple struct `Name<T>(pub T)`
//! that keeps values of different units from being mixed by accident. A
//! value can be scaled by a bare number and keeps its unit. Moving a value
//! into another unit is left to the caller, usually through an explicit
//! ratio type.
//!
//! ```
//! use unit_wrapper::unit_wrapper;
//!
//! unit_wrapper!(pub Pixel);
//!
//! assert_eq!(Pixel(5.0) * 2.0, Pixel(10.0));
//! ```

#[macro_export]
macro_rules! unit_wrapper {
    ($name:ident) => { $crate::unit_wrapper!(() $name); };
    (pub $name:ident) => { $crate::unit_wrapper!((pub) $name); };
    (($($vis:tt)*) $name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        $($vis)* struct $name<T>(pub T);

        impl<T> $name<T> {
            /// Unwrap the bare value.
            pub fn into_inner(self) -> T {
                self.0
            }
        }

        impl<T> From<T> for $name<T> {
            fn from(value: T) -> Self {
                Self(value)
            }
        }

        impl<T> std::ops::Mul<T> for $name<T>
        where
            T: std::ops::Mul<T, Output = T>,
        {
            type Output = $name<T>;

            fn mul(self, rhs: T) -> Self::Output {
                $name(self.0 * rhs)
            }
        }
    };
}
