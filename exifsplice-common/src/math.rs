#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Operation {0:?} + {1:?} failed")]
    AddFailed(Option<i128>, Option<i128>),
    #[error("Operation {0:?} - {1:?} failed")]
    SubFailed(Option<i128>, Option<i128>),
    #[error("Operation {0:?} * {1:?} failed")]
    MulFailed(Option<i128>, Option<i128>),
    #[error("Conversion failed for value {0:?}")]
    ConversionFailed(Option<i128>),
}

/// Container for safe integers operators
///
/// Errors are carried through chained operations and surface on
/// [`Checked::check`].
///
/// ```
/// # use exifsplice_common::math::Checked;
/// let header = Checked::new(8_u32);
/// let primary = 18_u32;
///
/// assert_eq!((header + primary).check(), Ok(26));
/// assert!((header + u32::MAX).check().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Checked<T>(Result<T, MathError>);

impl<T> Checked<T> {
    pub fn new(val: T) -> Self {
        Self(Ok(val))
    }

    pub fn check(self) -> Result<T, MathError> {
        self.0
    }
}

impl<T> From<T> for Checked<T> {
    fn from(val: T) -> Self {
        Self(Ok(val))
    }
}

/// Redefines variables as [`Checked`]
///
/// ```
/// use exifsplice_common::math::checked;
///
/// let offset = 8_u32;
/// let len = 22_u32;
/// checked![offset];
///
/// assert_eq!((offset + len).check(), Ok(30));
/// ```
#[macro_export]
macro_rules! checked [
    ($($v:ident$(,)?)*) => {
        $( let $v = $crate::math::Checked::new($v); )*
    };
];

pub use checked;

macro_rules! impl_operator {
    ($op:ident, $f:ident, $t:ty) => {
        paste::paste! {
            impl [< Safe $op >] for $t {
                fn [< safe_ $f >](self, rhs: $t) -> Result<$t, MathError> {
                    let err = || MathError:: [< $op Failed >] (self.try_into().ok(), rhs.try_into().ok());
                    self.[< checked_ $f >](rhs)
                        .ok_or_else(err)
                }
            }
        }

        impl<R: Into<Checked<$t>>> std::ops::$op<R> for Checked<$t> {
            type Output = Self;

            #[inline]
            fn $f(self, rhs: R) -> Self::Output {
                let Checked(Ok(x)) = self else { return self };
                let Checked(y) = rhs.into();
                let y = match y {
                    Ok(y) => y,
                    Err(err) => return Checked(Err(err)),
                };
                paste::paste! {
                    Checked(x.[< safe_ $f >](y))
                }
            }
        }
    };
}

macro_rules! impl_binary_operators {
    ($t:ty) => {
        impl_operator!(Add, add, $t);
        impl_operator!(Sub, sub, $t);
        impl_operator!(Mul, mul, $t);
    };
}

impl_binary_operators!(u16);
impl_binary_operators!(u32);
impl_binary_operators!(u64);
impl_binary_operators!(usize);

macro_rules! impl_conversion {
    ($trait:ident, $f:ident, $target:ty, [$($source:ty),*]) => {
        pub trait $trait: Sized + TryInto<$target> + TryInto<i128> + Copy {
            fn $f(self) -> Result<$target, MathError> {
                self.try_into()
                    .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
            }
        }

        $( impl $trait for $source {} )*
    };
}

impl_conversion!(ToU16, u16, u16, [u32, u64, usize]);
impl_conversion!(ToU32, u32, u32, [u16, u64, usize]);
impl_conversion!(ToUsize, usize, usize, [u16, u32, u64]);

/// Same as `checked_add` functions but returns an error
pub trait SafeAdd: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self, MathError>;
}

/// Same as `checked_sub` functions but returns an error
pub trait SafeSub: Sized {
    fn safe_sub(self, rhs: Self) -> Result<Self, MathError>;
}

/// Same as `checked_mul` functions but returns an error
pub trait SafeMul: Sized {
    fn safe_mul(self, rhs: Self) -> Result<Self, MathError>;
}
