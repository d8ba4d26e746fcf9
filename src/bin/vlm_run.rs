use std::{env, path::PathBuf, process};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use flyer_vlm::{load_project, save_results, Analysis, ProjectResults};

fn usage() -> ! {
    eprintln!("Usage: vlm_run <project.json|project.yaml> [results.json]");
    process::exit(2);
}

fn run(project_path: PathBuf, output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let project = load_project(&project_path)?;
    let states = project.flight_states()?;

    let analysis = Analysis::new(&project.aircraft, project.analysis)?;
    let results = if states.len() == 1 {
        vec![analysis.evaluate(&states[0])?]
    } else {
        analysis.sweep(&states)?
    };

    for result in &results {
        let c = &result.coefficients;
        info!(
            "alpha = {:6.2}, beta = {:6.2}: CL = {:8.5}, CD = {:8.5}, CC = {:8.5}, Cl = {:8.5}, Cm = {:8.5}, Cn = {:8.5}",
            result.state.alpha, result.state.beta, c.c_lift, c.c_drag, c.c_side, c.c_roll, c.c_pitch, c.c_yaw
        );
    }

    save_results(
        &output,
        &ProjectResults {
            aircraft: project.aircraft.uid.clone(),
            panel_count: analysis.lattice().len(),
            results,
        },
    )?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = env::args().skip(1);
    let project_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => usage(),
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| project_path.with_extension("results.json"));

    if let Err(err) = run(project_path, output) {
        error!("{}", err);
        process::exit(1);
    }
}
