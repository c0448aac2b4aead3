use super::LineNumber;

/// A diagnostic produced while parsing or executing a script.
///
/// Errors never abort a run. The runtime renders them with `Display`
/// and hands the text to the host's debug channel.
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    /// Attaches a line number unless one is already present.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: line,
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 2,
    UnknownCommand = 3,
    UndefinedVariable = 4,
    UnsupportedArgument = 5,
    OutOfBudget = 7,
    NestingTooDeep = 16,
    InternalError = 51,
    FileNotFound = 53,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            SyntaxError => "SYNTAX ERROR",
            UnknownCommand => "UNKNOWN COMMAND",
            UndefinedVariable => "UNDEFINED VARIABLE",
            UnsupportedArgument => "UNSUPPORTED ARGUMENT",
            OutOfBudget => "MEMORY BUDGET EXCEEDED",
            NestingTooDeep => "NESTING TOO DEEP",
            InternalError => "INTERNAL ERROR",
            FileNotFound => "FILE NOT FOUND",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code, suffix)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_display() {
        assert_eq!(error!(SyntaxError).to_string(), "SYNTAX ERROR");
        assert_eq!(error!(OutOfBudget, Some(3)).to_string(), "MEMORY BUDGET EXCEEDED IN 3");
        assert_eq!(
            error!(UndefinedVariable, Some(12); "@name").to_string(),
            "UNDEFINED VARIABLE IN 12; @name"
        );
    }

    #[test]
    fn test_line_number_sticks() {
        let e = error!(SyntaxError, Some(2)).in_line_number(Some(9));
        assert_eq!(e.line_number(), Some(2));
        let e = error!(SyntaxError).in_line_number(None);
        assert_eq!(e.line_number(), None);
    }
}
