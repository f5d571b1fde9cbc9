use anyhow::Context;

use sfnt::{Font, NameId};

const USAGE: &str = "usage: sfnt <font-file> [text]";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().context(USAGE)?;
    let text = args.next().unwrap_or_else(|| "AWAY Tokyo".to_owned());

    let bytes = std::fs::read(&path).with_context(|| format!("failed to read {}", path))?;

    if sfnt::is_collection(&bytes) {
        let collection = sfnt::parse_collection(&bytes)?;

        println!(
            "collection v{}.{} with {} fonts",
            collection.header.major_version,
            collection.header.minor_version,
            collection.len()
        );

        for (index, font) in collection.iter().enumerate() {
            println!();
            println!("font {}", index);
            print_font(font, &text);
        }
    } else {
        print_font(&sfnt::parse_font(&bytes)?, &text);
    }

    Ok(())
}

fn print_font(font: &Font, text: &str) {
    let directory = font.directory();

    println!("{:?}", directory.offset_subtable.sfnt_version);
    for entry in directory.entries() {
        println!(
            "  {} offset {:>8} length {:>8}",
            entry.tag, entry.offset, entry.length
        );
    }

    println!("family:    {}", font.name(NameId::FAMILY_NAME, "en-US"));
    println!("subfamily: {}", font.name(NameId::SUBFAMILY_NAME, "en-US"));
    println!("glyphs:    {}", font.maxp().num_glyphs());
    println!("units/em:  {}", font.head().units_per_em);

    let chars: Vec<char> = text.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        let glyph = sfnt::resolve_glyph(c, font);

        match chars.get(i + 1) {
            Some(&next) => println!(
                "  {:?} -> {:?}, kerning with {:?}: {}",
                c,
                glyph,
                next,
                sfnt::resolve_kerning(c, next, font)
            ),
            None => println!("  {:?} -> {:?}", c, glyph),
        }
    }
}
