/// Errors that terminate an analysis
#[derive(Debug)]
pub enum Error {
    /// A file could not be read or written
    Io {
        path: String,
        source: std::io::Error,
    },
    /// A delimited file is malformed, misses a required column or has a value of the wrong type
    Csv { path: String, source: csv::Error },
    /// The vehicle table has no rows
    NoVehicles,
    /// A vehicle has no emissions row with a rate and no row of the emissions table has one
    NoEmissionRate,
    Template(tinytemplate::error::Error),
    Json(serde_json::Error),
    Image(image::ImageError),
    /// The embedded chart font cannot be parsed
    Font(ab_glyph::InvalidFont),
}

impl Error {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Template(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Image(e) => Some(e),
            Self::Font(e) => Some(e),
            Self::NoVehicles | Self::NoEmissionRate => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{path}: {source}"),
            Self::Csv { path, source } => write!(f, "{path}: {source}"),
            Self::NoVehicles => write!(f, "the vehicle table is empty"),
            Self::NoEmissionRate => write!(
                f,
                "a vehicle has no matching emissions rate and no row of the emissions table has a rate"
            ),
            Self::Template(e) => std::fmt::Display::fmt(&e, f),
            Self::Json(e) => std::fmt::Display::fmt(&e, f),
            Self::Image(e) => std::fmt::Display::fmt(&e, f),
            Self::Font(e) => std::fmt::Display::fmt(&e, f),
        }
    }
}

impl From<tinytemplate::error::Error> for Error {
    fn from(e: tinytemplate::error::Error) -> Self {
        Self::Template(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}
