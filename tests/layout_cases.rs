use camino::Utf8Path;
use facet_svg::{Svg, facet_xml};
use miette::Diagnostic;
use tickgrid::{KeyValueParams, LayoutParams, ParameterSource, compute_layout, export_svg};

/// What a case file says should happen
#[derive(Debug, Default)]
struct Expectation {
    cells: Option<usize>,
    ticks: Option<usize>,
    paths: Option<usize>,
    error: Option<String>,
}

fn expectation(params: &KeyValueParams) -> datatest_stable::Result<Expectation> {
    let count = |key: &str| -> datatest_stable::Result<Option<usize>> {
        match params.param(key) {
            Some(v) => Ok(Some(v.parse().map_err(|e| format!("{key} = {v:?}: {e}"))?)),
            None => Ok(None),
        }
    };
    Ok(Expectation {
        cells: count("expect.cells")?,
        ticks: count("expect.ticks")?,
        paths: count("expect.paths")?,
        error: params.param("expect.error").map(str::to_string),
    })
}

fn check(label: &str, expected: Option<usize>, actual: usize) -> datatest_stable::Result<()> {
    match expected {
        Some(n) if n != actual => Err(format!("expected {n} {label}, got {actual}").into()),
        _ => Ok(()),
    }
}

fn run_layout_case(path: &Utf8Path) -> datatest_stable::Result<()> {
    let text = std::fs::read_to_string(path)?;
    let params: KeyValueParams = text.parse()?;
    let expect = expectation(&params)?;

    let outcome = LayoutParams::from_source(&params).and_then(|p| compute_layout(&p));

    let layout = match (outcome, &expect.error) {
        (Ok(layout), None) => layout,
        (Err(err), Some(code)) => {
            let actual = err.code().map(|c| c.to_string()).unwrap_or_default();
            if &actual != code {
                return Err(format!("expected error {code}, got {actual}: {err}").into());
            }
            return Ok(());
        }
        (Ok(layout), Some(code)) => {
            return Err(format!(
                "expected error {code}, but layout succeeded with {} cells",
                layout.registry.len()
            )
            .into());
        }
        (Err(err), None) => return Err(format!("unexpected error: {err}").into()),
    };

    check("cells", expect.cells, layout.registry.len())?;
    check("ticks", expect.ticks, layout.ticks.len())?;
    check("segments", expect.paths, layout.segments.len())?;

    // Every recorded card must lie on the page.
    for card in layout.registry.iter_row_major() {
        if !card.corners.to_array().iter().all(|&p| layout.setup.paper.contains(p)) {
            return Err(format!("card {} leaves the page", card.coord).into());
        }
    }

    // The exported document parses back with one path per segment.
    let svg = export_svg(layout.setup.paper, &layout.segments)?;
    let doc: Svg = facet_xml::from_str(&svg).map_err(|e| format!("XML parse error: {e}"))?;
    check("paths", expect.paths, doc.paths().len())?;

    Ok(())
}

datatest_stable::harness! {
    { test = run_layout_case, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/cases"), pattern = r"\.params$" },
}
