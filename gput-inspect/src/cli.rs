use clap::Parser;
use gput_data::ElementType;

#[derive(Parser, Debug)]
#[command(
    name = "gput-inspect",
    about = "Prints the packed vertex layout for a list of element types",
    long_about = "Computes per-attribute byte offsets and the common stride of an interleaved \
                  vertex record, using the same packing rules as gput's vertex layout binding"
)]
pub struct Cli {
    /// Element types in memory order, e.g. `vec3_f32 vec2_f16 u32`
    #[arg(value_name = "ELEMENT", value_parser = parse_element)]
    pub elements: Vec<ElementType>,

    /// Print the layout as JSON
    #[arg(long)]
    pub json: bool,

    /// Attribute index assigned to the first element
    #[arg(short = 'i', long, default_value = "0", value_name = "INDEX")]
    pub first_index: u32,

    /// List all element types and exit
    #[arg(short = 'L', long)]
    pub list_types: bool,
}

fn parse_element(s: &str) -> Result<ElementType, String> {
    s.parse().map_err(|e| format!("{e}; run with --list-types for valid names"))
}

impl Cli {
    /// Displays every element type with its descriptor
    pub fn display_type_list() {
        println!("{:<10} {:>4} {:>5} {:>10} {:>8}", "TYPE", "SIZE", "ALIGN", "COMPONENTS", "INTEGER");
        println!("{}", "-".repeat(41));

        for ty in ElementType::ALL {
            let desc = ty.descriptor();
            println!(
                "{:<10} {:>4} {:>5} {:>10} {:>8}",
                ty.name(),
                desc.size,
                desc.alignment,
                desc.component_count,
                desc.is_integral
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_elements() {
        let cli = Cli::try_parse_from(["gput-inspect", "vec2_f32", "I32", "--json"]).unwrap();

        assert_eq!(cli.elements, [ElementType::Vec2F32, ElementType::I32]);
        assert!(cli.json);
        assert_eq!(cli.first_index, 0);
        assert!(!cli.list_types);
    }

    #[test]
    fn test_first_index() {
        let cli = Cli::try_parse_from(["gput-inspect", "-i", "3", "u8"]).unwrap();
        assert_eq!(cli.first_index, 3);
    }

    #[test]
    fn test_unknown_element_is_rejected() {
        let err = Cli::try_parse_from(["gput-inspect", "vec2_f64"]).unwrap_err();
        assert!(err.to_string().contains("vec2_f64"));
    }

    #[test]
    fn test_no_elements_parses() {
        // empty input is rejected by the packer, not by argument parsing
        let cli = Cli::try_parse_from(["gput-inspect"]).unwrap();
        assert!(cli.elements.is_empty());
    }
}
