pub struct Error {
    code: u16,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            message: String::new(),
        }
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            message: message.into(),
        }
    }

    /// Classifies an I/O failure on `filename`.
    pub fn from_io(error: &std::io::Error, filename: &str) -> Error {
        use std::io::ErrorKind;
        let msg = format!("{}: {}", filename, error);
        match error.kind() {
            ErrorKind::NotFound => error!(FileNotFound; msg),
            ErrorKind::InvalidInput => error!(BadFileName; msg),
            _ => error!(DiskIoError; msg),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ErrorCode {
    IllegalFunctionCall = 5,
    NoTextToOutput = 24,
    BadFont = 25,
    FileNotFound = 53,
    DiskIoError = 57,
    BadFileName = 64,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            5 => "ILLEGAL FUNCTION CALL",
            24 => "NO TEXT TO OUTPUT",
            25 => "BAD FONT",
            53 => "FILE NOT FOUND",
            57 => "DISK I/O ERROR",
            64 => "BAD FILE NAME",
            _ => "",
        };
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}", self.code)?;
        } else {
            write!(f, "{}", code_str)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
