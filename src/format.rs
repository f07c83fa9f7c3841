//! Signature dispatch from a data file's first line to its driver.

use crate::context::DecompileContext;
use crate::drivers;
use crate::error::DecodeError;
use crate::reader::TokenReader;
use serde::Serialize;
use std::fmt;
use std::io::BufRead;

/// Data file formats with a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileFormat {
    /// `scripts.txt`.
    Scripts,
    /// `triggers.txt`.
    Triggers,
    /// `simple_triggers.txt`.
    SimpleTriggers,
    /// `conversation.txt` (Warband layout).
    Dialogs,
    /// `party_templates.txt`.
    PartyTemplates,
    /// `mission_templates.txt`.
    MissionTemplates,
    /// `skins.txt`.
    Skins,
}

impl FileFormat {
    /// Every supported format.
    pub const ALL: [FileFormat; 7] = [
        FileFormat::Scripts,
        FileFormat::Triggers,
        FileFormat::SimpleTriggers,
        FileFormat::Dialogs,
        FileFormat::PartyTemplates,
        FileFormat::MissionTemplates,
        FileFormat::Skins,
    ];

    /// First line identifying the format.
    #[must_use]
    pub const fn signature(self) -> &'static str {
        match self {
            FileFormat::Scripts => "scriptsfile version 1",
            FileFormat::Triggers => "triggersfile version 1",
            FileFormat::SimpleTriggers => "simple_triggers_file version 1",
            FileFormat::Dialogs => "dialogsfile version 2",
            FileFormat::PartyTemplates => "partytemplatesfile version 1",
            FileFormat::MissionTemplates => "missionsfile version 1",
            FileFormat::Skins => "skins_file version 1",
        }
    }

    /// Generated module file name.
    #[must_use]
    pub const fn output_name(self) -> &'static str {
        match self {
            FileFormat::Scripts => "module_scripts.py",
            FileFormat::Triggers => "module_triggers.py",
            FileFormat::SimpleTriggers => "module_simple_triggers.py",
            FileFormat::Dialogs => "module_dialogs.py",
            FileFormat::PartyTemplates => "module_party_templates.py",
            FileFormat::MissionTemplates => "module_mission_templates.py",
            FileFormat::Skins => "module_skins.py",
        }
    }

    /// Identify a format from a file's first line.
    #[must_use]
    pub fn detect(first_line: &str) -> Option<Self> {
        let line = first_line.trim();
        Self::ALL.into_iter().find(|format| format.signature() == line)
    }

    /// Render the file body; `reader` must be positioned just past the
    /// signature line.
    ///
    /// # Errors
    ///
    /// Returns the [`DecodeError`] of the first field or statement block
    /// that cannot be decoded, or [`DecodeError::Cancelled`].
    pub fn decompile<R: BufRead>(
        self,
        reader: &mut TokenReader<R>,
        ctx: &DecompileContext,
    ) -> Result<String, DecodeError> {
        match self {
            FileFormat::Scripts => drivers::scripts::decompile(reader, ctx),
            FileFormat::Triggers => drivers::triggers::decompile(reader, ctx),
            FileFormat::SimpleTriggers => drivers::triggers::decompile_simple(reader, ctx),
            FileFormat::Dialogs => drivers::dialogs::decompile(reader, ctx),
            FileFormat::PartyTemplates => drivers::party_templates::decompile(reader, ctx),
            FileFormat::MissionTemplates => drivers::mission_templates::decompile(reader, ctx),
            FileFormat::Skins => drivers::skins::decompile(reader, ctx),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.signature())
    }
}
