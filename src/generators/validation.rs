//! Input validation module for report generation.
//!
//! Provides clear, descriptive validation messages for the field
//! application. Validation here is advisory: generation never rejects a
//! report, callers log the formatted message and proceed with the
//! documented defaults (empty strings, reselected lengths).

use std::fmt;

/// Validation issue with detailed, user-friendly messages.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable message in Portuguese
    pub message: String,
    /// Suggestion for how to fix the issue
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create issue for empty required field
    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{label} não foi preenchido")).with_suggestion(format!(
            "O documento será emitido com {} em branco",
            label.to_lowercase()
        ))
    }

    /// Create issue for malformed protocol number
    pub fn invalid_protocolo(field: &str, value: &str) -> Self {
        Self::new(field, format!("Protocolo '{value}' fora do padrão"))
            .with_suggestion("Use o número do atendimento, por exemplo: FAR-1234")
    }

    /// Create issue for invalid state abbreviation
    pub fn invalid_uf(field: &str, value: &str) -> Self {
        Self::new(field, format!("UF '{value}' inválida"))
            .with_suggestion("Informe a sigla com duas letras, por exemplo: SP")
    }

    /// Create issue for zero tile quantity
    pub fn invalid_quantidade(field: &str) -> Self {
        Self::new(field, "Quantidade de telhas igual a zero")
            .with_suggestion("Informe a quantidade instalada para o cálculo da área coberta")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation issues with formatted output.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get formatted message suitable for logs and form feedback
    pub fn to_warning_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "Laudo com {} pendência(s) de preenchimento:",
            self.errors.len()
        )];

        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }

        parts.join("\n")
    }

    /// Convert to Result - Ok if no issues, Err with formatted message otherwise
    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_warning_message())
        }
    }
}

// ============================================================================
// Validation functions
// ============================================================================

/// Validate that a string is not empty after trimming
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Validate protocol format: FAR- prefix followed by digits
pub fn validate_protocolo(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(ValidationError::empty_field(field, "Protocolo"));
        return;
    }

    let valido = trimmed
        .strip_prefix("FAR-")
        .map(|resto| !resto.is_empty() && resto.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false);
    if !valido {
        errors.add(ValidationError::invalid_protocolo(field, trimmed));
    }
}

/// Validate state abbreviation (two ASCII letters) - optional, only if provided
pub fn validate_uf(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return; // Optional, so empty is OK
    }

    if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        errors.add(ValidationError::invalid_uf(field, trimmed));
    }
}

/// Validate tile quantity is positive
pub fn validate_quantidade(value: u32, field: &str, errors: &mut ValidationErrors) {
    if value == 0 {
        errors.add(ValidationError::invalid_quantidade(field));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_protocolo() {
        let mut errors = ValidationErrors::new();
        validate_protocolo("FAR-1234", "protocolo", &mut errors);
        assert!(errors.is_empty());

        validate_protocolo("1234", "protocolo", &mut errors);
        validate_protocolo("FAR-", "protocolo", &mut errors);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_validate_uf_opcional() {
        let mut errors = ValidationErrors::new();
        validate_uf("", "uf", &mut errors);
        validate_uf("SP", "uf", &mut errors);
        assert!(errors.is_empty());

        validate_uf("S1", "uf", &mut errors);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_mensagem_formatada() {
        let mut errors = ValidationErrors::new();
        validate_required("", "cliente", "Nome do Cliente", &mut errors);
        validate_quantidade(0, "telhas[0].quantidade", &mut errors);

        let err = errors.into_result().unwrap_err();
        assert!(err.contains("2 pendência(s)"));
        assert!(err.contains("[cliente]"));
        assert!(err.contains("[telhas[0].quantidade]"));
    }
}
