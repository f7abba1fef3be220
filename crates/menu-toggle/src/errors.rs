use crate::ElementId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToggleError {
    #[error("element not found: #{id}")]
    ElementNotFound { id: ElementId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_not_found_names_the_id() {
        let err = ToggleError::ElementNotFound {
            id: ElementId::from("user-area"),
        };
        assert_eq!(err.to_string(), "element not found: #user-area");
    }
}
