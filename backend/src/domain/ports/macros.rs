//! Helper macro for generating domain port error enums.
//!
//! Every variant carries named fields and gets a snake_case constructor
//! accepting `impl Into<_>` for each field, so adapters can write
//! `ScoreRepositoryError::query("...")`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),+ },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                }
            )+
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StoreCheckError {
            Locked { path: String } => "store locked: {path}",
            Busy { path: String, retries: u32 } => "store busy: {path} after {retries} retries",
        }
    }

    #[test]
    fn string_fields_accept_borrowed_input() {
        let err = StoreCheckError::locked("scores.db");
        assert_eq!(
            err,
            StoreCheckError::Locked {
                path: "scores.db".to_owned()
            }
        );
        assert_eq!(err.to_string(), "store locked: scores.db");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = StoreCheckError::busy("scores.db", 3_u32);
        assert_eq!(err.to_string(), "store busy: scores.db after 3 retries");
    }
}
