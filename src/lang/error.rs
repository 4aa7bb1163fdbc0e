use super::Offset;

pub struct Error {
    code: u16,
    offset: Option<Offset>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$pos:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_offset($pos)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$pos:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_offset($pos)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            offset: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn offset(&self) -> Option<Offset> {
        self.offset
    }

    pub fn at_offset(self, offset: Offset) -> Error {
        debug_assert!(self.offset.is_none());
        Error {
            offset: Some(offset),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    SyntaxError = 2,
    Break = 3,
    Overflow = 6,
    OutOfMemory = 7,
    DivisionByZero = 11,
    LineBufferOverflow = 23,
    MissingClosingBrace = 29,
    UnexpectedClosingBrace = 30,
    InternalError = 51,
    BadStoreNumber = 52,
    FileNotFound = 53,
    DiskIoError = 57,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            3 => "BREAK",
            6 => "OVERFLOW",
            7 => "OUT OF MEMORY",
            11 => "DIVISION BY ZERO",
            23 => "LINE BUFFER OVERFLOW",
            29 => "MISSING CLOSING BRACE",
            30 => "UNEXPECTED CLOSING BRACE",
            51 => "INTERNAL ERROR",
            52 => "BAD STORE NUMBER",
            53 => "FILE NOT FOUND",
            57 => "DISK I/O ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(offset) = self.offset {
            suffix.push_str(&format!(" AT {}", offset));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use crate::error;

    #[test]
    fn test_display() {
        assert_eq!(error!(SyntaxError).to_string(), "SYNTAX ERROR");
        assert_eq!(
            error!(SyntaxError, ..12; "EXPECTED RIGHT BRACE").to_string(),
            "SYNTAX ERROR AT 12; EXPECTED RIGHT BRACE"
        );
        assert_eq!(
            error!(FileNotFound; "program2.ubp").to_string(),
            "FILE NOT FOUND; program2.ubp"
        );
    }

    #[test]
    fn test_is() {
        let e = error!(DivisionByZero, ..4);
        assert!(e.is(crate::lang::ErrorCode::DivisionByZero));
        assert_eq!(e.offset(), Some(4));
        assert_eq!(e.code(), 11);
    }
}
