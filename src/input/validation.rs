pub fn validate_repository(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        Err("The repository name or URL must not be empty".to_string())
    } else {
        Ok(())
    }
}

pub fn validate_commit_message(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        Err("The commit message must not be empty".to_string())
    } else {
        Ok(())
    }
}

/// Interpret a yes/no answer. Anything unrecognised counts as no.
pub fn parse_confirmation(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_repository() {
        assert!(validate_repository("myrepo").is_ok());
        assert!(validate_repository("git@example.com:org/name.git").is_ok());
        assert!(validate_repository("").is_err());
        assert!(validate_repository("   ").is_err());
    }

    #[test]
    fn test_validate_commit_message() {
        assert!(validate_commit_message("Initial commit").is_ok());
        assert!(validate_commit_message("\t").is_err());
    }

    #[test]
    fn test_parse_confirmation() {
        assert!(parse_confirmation("y"));
        assert!(parse_confirmation(" YES \n"));
        assert!(!parse_confirmation("n"));
        assert!(!parse_confirmation(""));
        assert!(!parse_confirmation("sure"));
    }
}
