use crate::config::{DEFAULT_MAX_ITERATIONS, DEFAULT_THREADS, DEFAULT_WINDOW_SIZE, ViewerConfig};
use crate::core::fractals::fractal_kinds::FractalKind;
use clap::{Parser, ValueEnum};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FractalArg {
    Mandelbrot,
    BurningShip,
    Tricorn,
}

impl From<FractalArg> for FractalKind {
    fn from(arg: FractalArg) -> Self {
        match arg {
            FractalArg::Mandelbrot => Self::Mandelbrot,
            FractalArg::BurningShip => Self::BurningShip,
            FractalArg::Tricorn => Self::Tricorn,
        }
    }
}

/// Interactive escape-time fractal viewer.
///
/// Keys 1/2/3 switch between Mandelbrot, Burning Ship and Tricorn. Left click
/// zooms in, right click zooms out, H toggles the status panel and Escape quits.
#[derive(Parser, Debug)]
#[command(name = "viewer", version)]
pub struct ViewerArgs {
    /// Width and height of the square window in pixels
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub size: u32,

    /// Iteration cap for the escape-time loop
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: u32,

    /// Number of render worker threads
    #[arg(long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Fractal shown at start-up
    #[arg(long, value_enum, default_value_t = FractalArg::Mandelbrot)]
    pub fractal: FractalArg,
}

impl ViewerArgs {
    #[must_use]
    pub fn into_config(self) -> ViewerConfig {
        ViewerConfig {
            window_size: self.size,
            max_iterations: self.iterations,
            threads: self.threads,
            initial_fractal: self.fractal.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn test_no_flags_gives_default_config() {
        let args = ViewerArgs::try_parse_from(["viewer"]).unwrap();

        assert_eq!(args.into_config(), ViewerConfig::default());
    }

    #[test]
    fn test_all_flags() {
        let args = ViewerArgs::try_parse_from([
            "viewer",
            "--size",
            "640",
            "--iterations",
            "1000",
            "--threads",
            "8",
            "--fractal",
            "burning-ship",
        ])
        .unwrap();

        assert_eq!(
            args.into_config(),
            ViewerConfig {
                window_size: 640,
                max_iterations: 1000,
                threads: 8,
                initial_fractal: FractalKind::BurningShip,
            }
        );
    }

    #[test]
    fn test_unknown_fractal_rejected() {
        assert!(ViewerArgs::try_parse_from(["viewer", "--fractal", "julia"]).is_err());
    }

    #[test]
    fn test_zero_threads_parses_but_fails_validation() {
        let config = ViewerArgs::try_parse_from(["viewer", "--threads", "0"])
            .unwrap()
            .into_config();

        assert_eq!(config.validate(), Err(ConfigError::ZeroThreads));
    }

    #[test]
    fn test_fractal_arg_maps_to_kind() {
        assert_eq!(FractalKind::from(FractalArg::Mandelbrot), FractalKind::Mandelbrot);
        assert_eq!(FractalKind::from(FractalArg::BurningShip), FractalKind::BurningShip);
        assert_eq!(FractalKind::from(FractalArg::Tricorn), FractalKind::Tricorn);
    }
}
