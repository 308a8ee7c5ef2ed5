use anyhow::Result;
use log::error;
use plotters::prelude::RGBColor;

pub static FONT_SIZE: i32 = 16;
pub static TITLE_FONT_SIZE: i32 = 20;
pub static STROKE_WIDTH: u32 = 1;

pub fn get_color_from_label(label: &str) -> Result<RGBColor> {
    match label {
        "mysql-blue" => Ok(RGBColor(0, 117, 143)),
        "mongodb-green" => Ok(RGBColor(77, 179, 61)),
        "dark-orange" => Ok(RGBColor(255, 140, 0)),
        _ => {
            error!("unrecognized label for color (label={label})");
            anyhow::bail!("unrecognized label (label={label})");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        let RGBColor(r, g, b) = get_color_from_label("mysql-blue").unwrap();
        assert_eq!((r, g, b), (0, 117, 143));
        let RGBColor(r, g, b) = get_color_from_label("mongodb-green").unwrap();
        assert_eq!((r, g, b), (0x4d, 0xb3, 0x3d));
        let RGBColor(r, g, b) = get_color_from_label("dark-orange").unwrap();
        assert_eq!((r, g, b), (255, 140, 0));
    }

    #[test]
    fn test_unknown_color() {
        assert!(get_color_from_label("light-pink").is_err());
        assert!(get_color_from_label("mysql").is_err());
    }
}
