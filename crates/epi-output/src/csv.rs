//! CSV renderers for networks and epidemic curves.
//!
//! Both renderers build the document in memory and return it as a `String`;
//! callers decide where it goes (file, socket, stdout).

use csv::Writer;
use epi_net::Network;
use epi_sim::DayCount;

use crate::{ExportError, ExportResult};

/// Render the network's directed edge list.
///
/// Columns: `source,target,strength,class,state`.  The `class` and `state`
/// columns describe the **source** endpoint, so a symmetric edge appears
/// twice with the annotations of each end in turn.  Composite categories are
/// comma-joined and therefore come out quoted.
pub fn edge_list_csv(network: &Network) -> ExportResult<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(["source", "target", "strength", "class", "state"])?;
    for person in &network.individuals {
        for (&other, &weight) in &person.contacts {
            writer.write_record(&[
                person.id.0.to_string(),
                other.0.to_string(),
                weight.to_string(),
                person.category.to_string(),
                person.state.0.to_string(),
            ])?;
        }
    }
    finish(writer)
}

/// Render an epidemic curve as `time,num_infected` rows, one per day.
pub fn curve_csv(series: &[DayCount]) -> ExportResult<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(["time", "num_infected"])?;
    for point in series {
        writer.write_record(&[point.day.to_string(), point.infectious.to_string()])?;
    }
    finish(writer)
}

fn finish(writer: Writer<Vec<u8>>) -> ExportResult<String> {
    let buffer = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    Ok(String::from_utf8(buffer)?)
}
