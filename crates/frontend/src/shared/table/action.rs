use super::Row;
use std::fmt;
use std::sync::Arc;

/// A row-scoped button in the "Actions" column.
///
/// The handler receives the full row and owns any follow-up (confirm
/// prompt, request, updating the page's collection); the table ignores
/// what happens next.
#[derive(Clone)]
pub struct RowAction {
    /// Icon name from [`crate::shared::icons::icon`]
    pub icon: &'static str,
    /// Tooltip and accessible label
    pub title: &'static str,
    /// Extra CSS class, e.g. `row-action--danger`
    pub class: &'static str,
    handler: Arc<dyn Fn(Row) + Send + Sync>,
}

impl RowAction {
    pub fn new<F>(icon: &'static str, title: &'static str, class: &'static str, handler: F) -> Self
    where
        F: Fn(Row) + Send + Sync + 'static,
    {
        Self {
            icon,
            title,
            class,
            handler: Arc::new(handler),
        }
    }

    pub fn edit<F>(handler: F) -> Self
    where
        F: Fn(Row) + Send + Sync + 'static,
    {
        Self::new("edit", "Edit", "row-action--edit", handler)
    }

    pub fn delete<F>(handler: F) -> Self
    where
        F: Fn(Row) + Send + Sync + 'static,
    {
        Self::new("delete", "Delete", "row-action--danger", handler)
    }

    pub fn toggle_status<F>(handler: F) -> Self
    where
        F: Fn(Row) + Send + Sync + 'static,
    {
        Self::new("refresh", "Change status", "row-action--info", handler)
    }

    pub fn invoke(&self, row: &Row) {
        (self.handler)(row.clone());
    }
}

impl fmt::Debug for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowAction")
            .field("icon", &self.icon)
            .field("title", &self.title)
            .field("class", &self.class)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    #[test]
    fn test_invoke_passes_full_row() {
        let seen = Arc::new(Mutex::new(Vec::<Row>::new()));
        let sink = seen.clone();
        let action = RowAction::delete(move |row| sink.lock().unwrap().push(row));

        let row = json!({"id": 4, "name": "Riverside"}).as_object().cloned().unwrap();
        action.invoke(&row);
        action.invoke(&row);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], row);
        assert_eq!(action.icon, "delete");
    }
}
