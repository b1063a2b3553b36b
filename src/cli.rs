// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "cube-sphere")]
#[command(about = "Animated sphere of cubes with a live debug panel", long_about = None)]
pub struct Cli {
    /// Hide the debug panel overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Frame rate cap in Hz
    #[arg(long = "fps", default_value = "30.0", value_parser = parse_fps)]
    pub fps: f32,
}

fn parse_fps(s: &str) -> Result<f32, String> {
    let fps: f32 = s.parse().map_err(|e| format!("invalid frame rate: {e}"))?;
    if fps.is_finite() && fps > 0.0 {
        Ok(fps)
    } else {
        Err(format!("frame rate must be positive, got {fps}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fps_is_thirty() {
        let cli = Cli::try_parse_from(["cube-sphere"]).unwrap();
        assert_eq!(cli.fps, 30.0);
        assert!(!cli.no_ui);
    }

    #[test]
    fn accepts_custom_fps() {
        let cli = Cli::try_parse_from(["cube-sphere", "--fps", "60"]).unwrap();
        assert_eq!(cli.fps, 60.0);
    }

    #[test]
    fn rejects_non_positive_fps() {
        assert!(Cli::try_parse_from(["cube-sphere", "--fps", "0"]).is_err());
        assert!(Cli::try_parse_from(["cube-sphere", "--fps", "-5"]).is_err());
        assert!(Cli::try_parse_from(["cube-sphere", "--fps", "inf"]).is_err());
        assert!(Cli::try_parse_from(["cube-sphere", "--fps", "nan"]).is_err());
    }
}
