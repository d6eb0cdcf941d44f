use crate::routes::Route;

#[derive(Debug)]
pub enum Command {
    List,
    Show {
        id: Option<String>,
    },
    Add {
        name: String,
        description: Option<String>,
        alibi: Option<String>,
        last_known_location: Option<String>,
    },
    Delete {
        id: String,
    },
}

impl Command {
    #[must_use]
    pub fn route(&self) -> Route {
        match self {
            Self::List | Self::Show { id: None } => Route::Suspects,
            Self::Add { .. } => Route::AddSuspect,
            Self::Show { id: Some(id) } | Self::Delete { id } => Route::Suspect { id: id.clone() },
        }
    }
}
