use crate::core::fractals::fractal_kinds::FractalKind;
use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;

pub const DEFAULT_WINDOW_SIZE: u32 = 800;
pub const DEFAULT_MAX_ITERATIONS: u32 = 400;
pub const DEFAULT_THREADS: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWindowSize,
    ZeroMaxIterations,
    ZeroThreads,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWindowSize => write!(f, "window size must be greater than zero"),
            Self::ZeroMaxIterations => write!(f, "max iterations must be greater than zero"),
            Self::ZeroThreads => write!(f, "at least one render thread is required"),
        }
    }
}

impl Error for ConfigError {}

/// Settings fixed for the lifetime of a viewer session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Width and height of the square window, in pixels.
    pub window_size: u32,
    pub max_iterations: u32,
    pub threads: usize,
    pub initial_fractal: FractalKind,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            threads: DEFAULT_THREADS,
            initial_fractal: FractalKind::default(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::ZeroWindowSize);
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        if self.threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }

        Ok(())
    }

    pub fn thread_count(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.threads).ok_or(ConfigError::ZeroThreads)
    }
}
