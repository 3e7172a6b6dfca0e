//! Error handling and exit codes.

use gibcalc_core::constants::exit_codes;
use gibcalc_core::error::GibError;

/// Exit code for a library error.
#[must_use]
pub fn handle_error(err: &GibError) -> i32 {
    match err {
        GibError::ModulusOutOfRange { .. } | GibError::InvalidInput(_) | GibError::Config(_) => {
            exit_codes::ERROR_CONFIG
        }
        GibError::Cancelled => exit_codes::ERROR_CANCELED,
    }
}

/// Exit code for any application error; non-library errors are generic.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<GibError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&GibError::Cancelled), 130);
        assert_eq!(handle_error(&GibError::Config("bad".into())), 4);
        assert_eq!(handle_error(&GibError::InvalidInput("bad".into())), 4);
        assert_eq!(
            handle_error(&GibError::ModulusOutOfRange {
                modulus: 1,
                min: 2,
                max: 100
            }),
            4
        );
    }

    #[test]
    fn anyhow_downcast() {
        let err = anyhow::Error::new(GibError::Cancelled);
        assert_eq!(exit_code(&err), 130);
        let err = anyhow::anyhow!("disk full");
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn context_keeps_code() {
        let err = anyhow::Error::new(GibError::Config("x".into())).context("loading");
        assert_eq!(exit_code(&err), 4);
    }
}
