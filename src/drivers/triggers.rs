//! `triggers.txt` → `module_triggers.py` and `simple_triggers.txt` →
//! `module_simple_triggers.py`.

use super::{begin_module, check_cancelled, count, end_module, push_block, trigger_param};
use crate::context::DecompileContext;
use crate::error::DecodeError;
use crate::reader::TokenReader;
use crate::statement::decompile_block;
use std::io::BufRead;

/// Triggers: check interval, delay and re-arm interval, then condition and
/// consequence blocks.
pub(crate) fn decompile<R: BufRead>(
    reader: &mut TokenReader<R>,
    ctx: &DecompileContext,
) -> Result<String, DecodeError> {
    let mut out = begin_module(&["header_triggers"], "triggers");
    let records = count(reader.next_i64()?);
    for _ in 0..records {
        check_cancelled(ctx)?;
        let check = trigger_param(reader.next_f64()?);
        let delay = trigger_param(reader.next_f64()?);
        let rearm = trigger_param(reader.next_f64()?);
        out.push_str(&format!("  ({check}, {delay}, {rearm},\n    "));
        push_block(&mut out, &decompile_block(reader, ctx)?, "    ");
        out.push_str(",\n    ");
        push_block(&mut out, &decompile_block(reader, ctx)?, "    ");
        out.push_str("),\n\n");
    }
    end_module(&mut out);
    Ok(out)
}

/// Simple triggers: interval and one statement block.
pub(crate) fn decompile_simple<R: BufRead>(
    reader: &mut TokenReader<R>,
    ctx: &DecompileContext,
) -> Result<String, DecodeError> {
    let mut out = begin_module(&["header_triggers"], "simple_triggers");
    let records = count(reader.next_i64()?);
    for _ in 0..records {
        check_cancelled(ctx)?;
        let interval = trigger_param(reader.next_f64()?);
        out.push_str(&format!("  ({interval},\n    "));
        push_block(&mut out, &decompile_block(reader, ctx)?, "    ");
        out.push_str("),\n\n");
    }
    end_module(&mut out);
    Ok(out)
}
