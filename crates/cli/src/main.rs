mod pattern;
mod provenance;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pattern::Pattern;
use provenance::Sidecar;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::path::{Path, PathBuf};
use stripcut::api::{sample_image, MinCutBehavior, Polygon, StripConfig};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "stripcut-cli")]
#[command(about = "Sample density maps into laser-cut strip polygons")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sample a synthetic density map and write the polygons as JSON
    Sample {
        #[arg(long, value_enum, default_value_t = Pattern::Gradient)]
        pattern: Pattern,
        #[arg(long, default_value_t = 400)]
        width: usize,
        #[arg(long, default_value_t = 300)]
        height: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// JSON file with a strip configuration; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        strips: Option<usize>,
        #[arg(long)]
        res: Option<usize>,
        #[arg(long)]
        density: Option<f64>,
        /// Drop rows narrower than the minimum cut spacing instead of widening them
        #[arg(long)]
        cull: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

/// CLI overrides applied on top of a loaded (or default) configuration.
#[derive(Debug, Default)]
struct Overrides {
    strips: Option<usize>,
    res: Option<usize>,
    density: Option<f64>,
    cull: bool,
}

#[derive(Serialize)]
struct SampleOutput<'a> {
    width: usize,
    height: usize,
    config: &'a StripConfig,
    polygons: Vec<Vec<[f64; 2]>>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sample {
            pattern,
            width,
            height,
            seed,
            config,
            strips,
            res,
            density,
            cull,
            out,
        } => {
            let overrides = Overrides {
                strips,
                res,
                density,
                cull,
            };
            let cfg = resolve_config(config.as_deref(), &overrides)?;
            sample(pattern, width, height, seed, cfg, &out)
        }
        Action::Report => report(),
    }
}

fn resolve_config(path: Option<&Path>, overrides: &Overrides) -> Result<StripConfig> {
    let mut cfg = match path {
        Some(path) => {
            let raw = std::fs::read(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_slice(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => StripConfig::default(),
    };
    if let Some(n) = overrides.strips {
        cfg.num_strips = n;
    }
    if let Some(n) = overrides.res {
        cfg.strip_res = n;
    }
    if let Some(d) = overrides.density {
        cfg.density = d;
    }
    if overrides.cull {
        cfg.min_cut_behavior = MinCutBehavior::Cull;
    }
    Ok(cfg)
}

fn sample(
    pattern: Pattern,
    width: usize,
    height: usize,
    seed: u64,
    cfg: StripConfig,
    out: &Path,
) -> Result<()> {
    tracing::info!(?pattern, width, height, seed, config = ?cfg, out = %out.display(), "sample");
    let image = pattern
        .render(width, height)
        .context("rendering density pattern")?;
    let mut rng = StdRng::seed_from_u64(seed);
    let polygons = sample_image(&image, cfg, &mut rng)
        .with_context(|| format!("sampling {width}x{height} image"))?;
    let points: usize = polygons.iter().map(Polygon::len).sum();
    tracing::info!(polygons = polygons.len(), points, "sampled");

    let doc = SampleOutput {
        width,
        height,
        config: &cfg,
        polygons: polygons.iter().map(polygon_coords).collect(),
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let prov = Sidecar::new(serde_json::json!({
        "pattern": format!("{pattern:?}").to_lowercase(),
        "width": width,
        "height": height,
        "seed": seed,
        "config": cfg,
    }))
    .summary(serde_json::json!({
        "polygons": polygons.len(),
        "points": points,
    }))
    .write_next_to(out)?;
    tracing::info!(provenance = %prov.display(), "wrote provenance");
    Ok(())
}

fn polygon_coords(poly: &Polygon) -> Vec<[f64; 2]> {
    poly.points().iter().map(|p| [p.x, p.y]).collect()
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::git_rev(),
        "stripcut_version": stripcut::VERSION,
        "default_config": StripConfig::default(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn overrides_apply_on_top_of_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        std::fs::write(
            &path,
            r#"{"num_strips": 6, "strip_res": 10, "min_cut_spacing": 1.5,
                "min_cut_behavior": "clamp"}"#,
        )
        .unwrap();
        let overrides = Overrides {
            res: Some(20),
            cull: true,
            ..Overrides::default()
        };
        let cfg = resolve_config(Some(&path), &overrides).unwrap();
        assert_eq!(cfg.num_strips, 6);
        assert_eq!(cfg.strip_res, 20);
        assert_eq!(cfg.min_cut_spacing, 1.5);
        assert_eq!(cfg.min_cut_behavior, MinCutBehavior::Cull);
        // Unspecified fields keep their defaults.
        assert_eq!(cfg.density, StripConfig::default().density);
    }

    #[test]
    fn sample_writes_polygons_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("run").join("polys.json");
        let cfg = StripConfig {
            num_strips: 4,
            strip_res: 5,
            ..StripConfig::default()
        };
        sample(Pattern::Rings, 80, 60, 3, cfg, &out).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["polygons"].as_array().unwrap().len(), 4);
        assert_eq!(parsed["polygons"][0].as_array().unwrap().len(), 12);
        assert!(dir.path().join("run").join("polys.provenance.json").exists());
    }

    #[test]
    fn sample_reports_invalid_config() {
        let dir = tempdir().unwrap();
        let cfg = StripConfig {
            num_strips: 0,
            ..StripConfig::default()
        };
        let out = dir.path().join("x.json");
        let err = sample(Pattern::Gradient, 10, 10, 0, cfg, &out).unwrap_err();
        assert!(format!("{err:#}").contains("num_strips"));
    }
}
