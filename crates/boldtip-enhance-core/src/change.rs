//! Tagged change notifications from the editor widget.
//!
//! The widget reports every document mutation together with a source tag.
//! Only user-originated mutations may touch the mirror field; programmatic
//! ones (widget initialization, API calls setting content) must not, or
//! loading a document would mark the form dirty and API writes could feed
//! back into themselves.

/// Where a document mutation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// The user edited the document through the widget UI.
    User,
    /// The widget or some API call mutated the document.
    Programmatic,
}

impl ChangeOrigin {
    /// Map the widget's loosely-typed source tag to an origin.
    ///
    /// Quill emits `"user"`, `"api"`, and `"silent"`. Anything that is not
    /// exactly `"user"` maps to [`ChangeOrigin::Programmatic`], the
    /// do-nothing arm, so an unknown or misspelled tag can never cause a
    /// spurious mirror write.
    pub fn from_source_tag(tag: &str) -> Self {
        match tag {
            "user" => ChangeOrigin::User,
            _ => ChangeOrigin::Programmatic,
        }
    }
}

/// A single change notification, as delivered to the live-sync path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeNotice {
    /// Origin tag of the mutation.
    pub origin: ChangeOrigin,
}

impl ChangeNotice {
    /// Notification with a user origin.
    pub fn user() -> Self {
        Self {
            origin: ChangeOrigin::User,
        }
    }

    /// Notification with a programmatic origin.
    pub fn programmatic() -> Self {
        Self {
            origin: ChangeOrigin::Programmatic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_tag_maps_to_user() {
        assert_eq!(ChangeOrigin::from_source_tag("user"), ChangeOrigin::User);
    }

    #[test]
    fn test_api_and_silent_map_to_programmatic() {
        assert_eq!(
            ChangeOrigin::from_source_tag("api"),
            ChangeOrigin::Programmatic
        );
        assert_eq!(
            ChangeOrigin::from_source_tag("silent"),
            ChangeOrigin::Programmatic
        );
    }

    #[test]
    fn test_unknown_tags_map_to_programmatic() {
        assert_eq!(
            ChangeOrigin::from_source_tag("usre"),
            ChangeOrigin::Programmatic
        );
        assert_eq!(ChangeOrigin::from_source_tag(""), ChangeOrigin::Programmatic);
    }
}
