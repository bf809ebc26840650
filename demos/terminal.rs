use linear_barcode::*;

const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";

const ROWS: usize = 6;

fn main() {
    let mut args = std::env::args().skip(1);
    let symbology = args.next().map(|s| Symbology::from_name(&s)).unwrap_or_default();
    let value = args.next().unwrap_or_else(|| String::from("Hello, world 123456"));

    let mut barcode = Barcode::new(symbology);
    barcode.generate(&value);

    let render = barcode.render().set_scale(1);
    let row: String = render.bits().map(|on| if on { BLACK } else { WHITE }).collect();

    println!("{symbology}: {:?}", barcode.encoded_value());
    for _ in 0..ROWS {
        println!("{row}");
    }
    println!("\x1B[0m{}{}{}", barcode.prefix(), barcode.encoded_value(), barcode.suffix());
}
