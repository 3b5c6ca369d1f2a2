use std::env;
use std::fs;
use std::path::Path;

/// (dataset id, actual column, optional projection column)
const DATASETS: [(&str, &str, Option<&str>); 4] = [
    (
        "median-age",
        "Median age, total",
        Some("Median age (Projected)"),
    ),
    (
        "population-growth-rates",
        "Growth rate, total",
        Some("Population growth rate (%) (Projected)"),
    ),
    (
        "population-with-un-projections",
        "Population, total",
        Some("Population, medium projection (Projected)"),
    ),
    ("life-expectancy", "Life expectancy", None),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy each dataset CSV to OUT_DIR for include_str!, dropping rows
    // without a country code (continent/region aggregates) to shrink the
    // embedded data. Missing fixtures get a small generated sample so the
    // app still builds and renders.
    for (id, actual_col, projected_col) in DATASETS {
        let src = Path::new("../fixtures").join(format!("{id}.csv"));
        let dest = Path::new(&out_dir).join(format!("{id}.csv"));

        if src.exists() {
            let filtered = filter_coded_rows(&src);
            fs::write(&dest, filtered).unwrap();
        } else {
            fs::write(&dest, sample_csv(actual_col, projected_col)).unwrap();
        }
        println!("cargo:rerun-if-changed=../fixtures/{id}.csv");
    }

    // World GeoJSON for the choropleth.
    let geo_src = Path::new("../fixtures/worldgeo.json");
    let geo_dest = Path::new(&out_dir).join("worldgeo.json");
    if geo_src.exists() {
        fs::copy(geo_src, &geo_dest).unwrap();
    } else {
        fs::write(&geo_dest, SAMPLE_GEOJSON).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/worldgeo.json");
}

/// Re-emit a dataset CSV keeping only rows whose Code column is non-empty.
fn filter_coded_rows(src: &Path) -> String {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(src)
        .expect("failed to open dataset csv");

    let headers = rdr.headers().expect("failed to read csv headers").clone();
    let code_idx = headers.iter().position(|h| h.trim() == "Code");

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(&headers).unwrap();

    for record in rdr.records().flatten() {
        let keep = match code_idx {
            Some(idx) => record.get(idx).is_some_and(|c| !c.trim().is_empty()),
            None => true,
        };
        if keep {
            wtr.write_record(&record).unwrap();
        }
    }

    String::from_utf8(wtr.into_inner().unwrap()).unwrap()
}

/// Minimal three-country, two-year sample in the dataset's column layout.
fn sample_csv(actual_col: &str, projected_col: Option<&str>) -> String {
    let mut header = format!("Entity,Code,Year,{actual_col}");
    if let Some(p) = projected_col {
        header.push(',');
        header.push_str(p);
    }

    let rows: [(&str, &str, i32, f64); 6] = [
        ("United States", "USA", 2000, 35.3),
        ("China", "CHN", 2000, 30.0),
        ("India", "IND", 2000, 22.7),
        ("United States", "USA", 2020, 38.5),
        ("China", "CHN", 2020, 38.4),
        ("India", "IND", 2020, 28.2),
    ];

    let mut out = header;
    out.push('\n');
    for (entity, code, year, value) in rows {
        if projected_col.is_some() {
            out.push_str(&format!("{entity},{code},{year},{value},\n"));
        } else {
            out.push_str(&format!("{entity},{code},{year},{value}\n"));
        }
    }
    out
}

const SAMPLE_GEOJSON: &str = r#"{"type":"FeatureCollection","features":[
{"type":"Feature","id":"USA","properties":{"name":"United States"},"geometry":{"type":"Polygon","coordinates":[[[-125,25],[-66,25],[-66,49],[-125,49],[-125,25]]]}},
{"type":"Feature","id":"CHN","properties":{"name":"China"},"geometry":{"type":"Polygon","coordinates":[[[74,18],[135,18],[135,53],[74,53],[74,18]]]}},
{"type":"Feature","id":"IND","properties":{"name":"India"},"geometry":{"type":"Polygon","coordinates":[[[68,7],[97,7],[97,35],[68,35],[68,7]]]}}
]}"#;
