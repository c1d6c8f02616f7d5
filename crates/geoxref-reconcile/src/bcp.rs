//! BCP output for the ACC_Accession table.
//!
//! One tab-delimited line per record, columns in table order. The bcp
//! consumer expects `1`/`0` for the bit columns and `%m/%d/%Y %H:%M:%S`
//! dates.

use std::io::{self, Write};

use crate::generate::CrossReferenceRecord;

const BCP_DATE_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Write one ACC_Accession row per record.
pub fn write_bcp<W: Write>(out: &mut W, records: &[CrossReferenceRecord]) -> io::Result<()> {
    for r in records {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            r.accession_key,
            r.accession,
            r.prefix_part,
            r.numeric_part,
            r.logical_db_key,
            r.marker_key,
            r.marker_type_key,
            flag(r.private),
            flag(r.preferred),
            r.created_by_key,
            r.modified_by_key,
            r.creation_date.format(BCP_DATE_FORMAT),
            r.modification_date.format(BCP_DATE_FORMAT),
        )?;
    }
    Ok(())
}
