use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ifc_xsd::QName;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum MissingEnumAction {
    Deny,
    Warn,
}

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[arg(default_value = "./schema/IFC4.xsd", help = "The source file or URL")]
    pub input: String,

    #[arg(
        long,
        default_value = "./schema",
        help = "Directory the JSON artifacts are written to"
    )]
    pub out_dir: PathBuf,

    #[arg(long, help = "Allow a XML Document Type Definition (DTD) to occur")]
    pub allow_dtd: bool,

    #[arg(
        long = "base",
        value_name = "QNAME",
        help = "Extension base of the root entities (repeatable) [default: <prefix>:IfcElement, <prefix>:IfcSpatialStructureElement]"
    )]
    pub bases: Vec<QName>,

    #[arg(
        long,
        default_value = "ifc",
        help = "Prefix the schema uses for its own types"
    )]
    pub prefix: String,

    #[arg(
        long,
        value_enum,
        default_value = "deny",
        help = "What to do with a PredefinedType that has no enumeration"
    )]
    pub missing_enum: MissingEnumAction,
}
