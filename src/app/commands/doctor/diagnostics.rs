#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub file: String,
    pub line: Option<u32>,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    fn location(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{}", self.file, line),
            None => self.file.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push_error(
        &mut self,
        file: impl Into<String>,
        line: Option<u32>,
        message: impl Into<String>,
    ) {
        self.errors.push(Diagnostic {
            file: file.into(),
            line,
            message: message.into(),
            severity: Severity::Error,
        });
    }

    pub fn push_warning(
        &mut self,
        file: impl Into<String>,
        line: Option<u32>,
        message: impl Into<String>,
    ) {
        self.warnings.push(Diagnostic {
            file: file.into(),
            line,
            message: message.into(),
            severity: Severity::Warning,
        });
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn emit(&self) {
        for diagnostic in &self.errors {
            eprintln!("[ERROR] {}: {}", diagnostic.location(), diagnostic.message);
        }
        for diagnostic in &self.warnings {
            eprintln!("[WARN] {}: {}", diagnostic.location(), diagnostic.message);
        }
    }
}
