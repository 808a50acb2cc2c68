use crate::config::ConfigError;
use crate::core::fractals::errors::AlgorithmError;
use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ControllerError {
    Config(ConfigError),
    Algorithm(AlgorithmError),
    SpawnWorker { index: usize, source: io::Error },
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid viewer configuration: {}", err),
            Self::Algorithm(err) => write!(f, "failed to build fractal algorithms: {}", err),
            Self::SpawnWorker { index, source } => {
                write!(f, "failed to spawn render worker {}: {}", index, source)
            }
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Algorithm(err) => Some(err),
            Self::SpawnWorker { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for ControllerError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<AlgorithmError> for ControllerError {
    fn from(err: AlgorithmError) -> Self {
        Self::Algorithm(err)
    }
}
