use log::{error, info, warn};
use polyreg_rs::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

const TOLERANCE: f64 = 1e-8;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    params: Params,
    expected: Expected,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    x: Vec<Vec<f64>>,
    y: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    degree: usize,
}

#[derive(Debug, Deserialize, Serialize)]
struct Expected {
    #[serde(default)]
    coefficients: Option<Vec<f64>>,
    #[serde(default)]
    loss: Option<f64>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    coefficients: Vec<f64>,
    loss: Option<f64>,
    error: Option<String>,
    passed: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let input_dir = root.join("cases");
    let output_dir = root.join("output");

    if !input_dir.exists() {
        warn!("Input directory {:?} does not exist", input_dir);
        return Ok(());
    }

    fs::create_dir_all(&output_dir)?;

    let mut failures = 0;
    for entry in fs::read_dir(&input_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            info!("Processing {:?}", path.file_name().unwrap_or_default());
            if !process_file(&path, &output_dir)? {
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} validation case(s) failed", failures).into());
    }
    info!("All validation cases passed");
    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<bool, Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let fitted = PolyReg::new()
        .degree(data.params.degree)
        .build()?
        .fit_rows(&data.input.x, &data.input.y);

    data.result.passed = match fitted {
        Ok(model) => {
            data.result.coefficients = model.para().iter().copied().collect();
            data.result.loss = Some(model.loss());
            matches_expected(&data.expected, &data.result)
        }
        Err(err) => {
            let kind = format!("{:?}", err.kind());
            data.result.error = Some(kind.clone());
            data.expected.error.as_deref() == Some(kind.as_str())
        }
    };

    if data.result.passed {
        info!("{}: ok", data.name);
    } else {
        error!(
            "{}: expected {:?}, got {:?}",
            data.name, data.expected, data.result
        );
    }

    let file_name = input_path.file_name().ok_or("missing file name")?;
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_dir.join(file_name), output_json)?;

    Ok(data.result.passed)
}

fn matches_expected(expected: &Expected, result: &ResultData) -> bool {
    if expected.error.is_some() {
        return false;
    }
    let coefficients_ok = expected.coefficients.as_ref().map_or(true, |beta| {
        beta.len() == result.coefficients.len()
            && beta
                .iter()
                .zip(&result.coefficients)
                .all(|(e, g)| (e - g).abs() <= TOLERANCE * e.abs().max(1.0))
    });
    let loss_ok = match (expected.loss, result.loss) {
        (Some(e), Some(g)) => (e - g).abs() <= TOLERANCE * e.abs().max(1.0),
        (None, _) => true,
        (Some(_), None) => false,
    };
    coefficients_ok && loss_ok
}
