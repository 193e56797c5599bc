use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Author::User => return write!(f, "You"),
            Author::Assistant => return write!(f, "WeatherBot"),
        }
    }
}
