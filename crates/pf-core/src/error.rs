use thiserror::Error;

pub type PfResult<T> = Result<T, PfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative value for {what}: {value}")]
    Negative { what: &'static str, value: f64 },

    #[error("Zero divisor: {what}")]
    DivisorZero { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PfError::Negative {
            what: "internal diameter",
            value: -5.0,
        };
        assert!(err.to_string().contains("internal diameter"));
        assert!(err.to_string().contains("-5"));
    }
}
