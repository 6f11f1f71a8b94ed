use super::explain_failure;
use crate::catalog::{catalog_for, MemberCatalog};
use crate::core::{MemberCategory, Record};
use crate::record::SampleRecord;
use crate::strategies::typed_display;
use anyhow::Result;
use std::io::{self, Write};

/// カタログ順にフィールド、プロパティの値を1行ずつ書き出す
pub fn write_demo<R, W>(out: &mut W, record: &R, catalog: &MemberCatalog<R>) -> Result<()>
where
    R: Record,
    W: Write,
{
    for category in MemberCategory::ALL {
        if category == MemberCategory::Property {
            writeln!(out)?;
        }
        match category {
            MemberCategory::Field => writeln!(out, "Class fields:")?,
            MemberCategory::Property => writeln!(out, "Class properties:")?,
        }

        for entry in catalog.entries(category) {
            let value = typed_display(record, category, entry.name, entry.kind)
                .map_err(|error| explain_failure(error.into()))?;
            writeln!(out, "Value of '{}' => {}", entry.name, value)?;
        }
    }

    Ok(())
}

/// サンプルレコードを作り、全メンバーの値を表示する
pub fn execute_demo() -> Result<()> {
    let catalog = catalog_for::<SampleRecord>();
    let record = SampleRecord::sample();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_demo(&mut out, &record, &catalog)?;
    out.flush()?;

    Ok(())
}
