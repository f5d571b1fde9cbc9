/// Declares a `u16` backed enum together with conversions from and to its
/// on-disk value
#[macro_export]
macro_rules! sfnt_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$doc:meta])*
                $variant:ident = $val:literal
            ),*,
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u16)]
        $vis enum $name {
            $(
                $(#[$doc])*
                $variant = $val
            ),*,
        }

        impl $name {
            pub const fn from_u16(n: u16) -> Option<Self> {
                Some(match n {
                    $($val => Self::$variant),*,
                    _ => return None,
                })
            }

            pub const fn to_u16(self) -> u16 {
                self as u16
            }
        }
    };
}
