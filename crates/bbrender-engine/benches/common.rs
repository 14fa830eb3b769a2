// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_post(size: usize) -> String {
    let base = "[heading]Section[/heading]\n[b]Bold[/b] and [i]italic[/i] with [color=#ff66aa]color[/color] and [size=150]size[/size].\n[quote=\"peppy\"]A quote with https://osu.ppy.sh inside[/quote]\n[list][*]one\n[*]two\n[*][url=https://a.test]three[/url][/list]\n[code]let x = [b]1[/b];\n[/code]\n[profile=2]peppy[/profile]\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_boxes(depth: usize) -> String {
    format!(
        "{}[spoilerbox]core[/spoilerbox]{}",
        "[box=Level]\n".repeat(depth),
        "\n[/box]".repeat(depth)
    )
}
