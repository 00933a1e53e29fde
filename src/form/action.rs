use crate::resource::ResourceId;

/// Whether a form creates a new record or edits an existing one.
///
/// The action is decided once when the form page is requested and does not
/// change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// The form creates a record.
    New,
    /// The form edits the record with the given ID.
    Edit(ResourceId),
}

impl FormAction {
    /// Derive the action from the first path segment after `base_path`.
    ///
    /// "/categories/new" is [FormAction::New] and "/categories/5/edit" is
    /// `FormAction::Edit(5)`. Returns `None` if `path` is not under
    /// `base_path` or the segment is neither "new" nor an ID.
    pub fn from_path(path: &str, base_path: &str) -> Option<Self> {
        let rest = path.strip_prefix(base_path)?.strip_prefix('/')?;
        let segment = rest.split('/').next()?;

        match segment {
            "new" => Some(FormAction::New),
            id => id.parse().ok().map(FormAction::Edit),
        }
    }

    /// The ID of the record being edited.
    pub fn id(self) -> Option<ResourceId> {
        match self {
            FormAction::New => None,
            FormAction::Edit(id) => Some(id),
        }
    }
}
