/// A change to an optional task field made by `edit`.
///
/// - `NoChange`: the field keeps its value
/// - `Set(value)`: the field takes the new value
/// - `Clear`: the field is emptied
///
/// ```
/// use twodo_domain::FieldUpdate;
///
/// let mut description = Some("old".to_string());
/// FieldUpdate::Set("new".to_string()).apply_to(&mut description);
/// assert_eq!(description.as_deref(), Some("new"));
///
/// FieldUpdate::Clear.apply_to(&mut description);
/// assert_eq!(description, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    #[default]
    NoChange,
    Set(T),
    Clear,
}

impl<T> FieldUpdate<T> {
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, FieldUpdate::NoChange)
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Clear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_change_keeps_value() {
        let mut field = Some(3);
        FieldUpdate::NoChange.apply_to(&mut field);
        assert_eq!(field, Some(3));
        assert!(!FieldUpdate::<i32>::NoChange.is_change());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(FieldUpdate::from(Some(1)), FieldUpdate::Set(1));
        assert_eq!(FieldUpdate::<i32>::from(None), FieldUpdate::Clear);
        assert!(FieldUpdate::<i32>::Clear.is_change());
    }
}
