mod tests {
    use led_curtain_composer::color::{
        ColorParseError, DEFAULT_COLOR, PRESET_COLORS, Rgb, color_or_default, parse_hex_color,
        rgb_from_u32, shade,
    };

    const CYAN: Rgb = Rgb {
        r: 0,
        g: 255,
        b: 255,
    };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    const AMBER: Rgb = Rgb {
        r: 200,
        g: 100,
        b: 0,
    };

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#00ffff"), Ok(CYAN));
        assert_eq!(parse_hex_color("00FFFF"), Ok(CYAN));
        assert_eq!(parse_hex_color("#Ff0080"), Ok(Rgb::new(255, 0, 128)));
        assert_eq!(parse_hex_color("#000000"), Ok(BLACK));
    }

    #[test]
    fn test_parse_hex_color_errors() {
        assert_eq!(
            parse_hex_color("#fff"),
            Err(ColorParseError::InvalidLength(3))
        );
        assert_eq!(
            parse_hex_color("1234567"),
            Err(ColorParseError::InvalidLength(7))
        );
        assert_eq!(parse_hex_color(""), Err(ColorParseError::InvalidLength(0)));
        assert_eq!(
            parse_hex_color("#12345g"),
            Err(ColorParseError::InvalidDigit('g'))
        );
        assert_eq!(
            parse_hex_color("##00ffff"),
            Err(ColorParseError::InvalidDigit('#'))
        );
    }

    #[test]
    fn test_color_or_default() {
        assert_eq!(DEFAULT_COLOR, CYAN);
        assert_eq!(color_or_default("#00ffff"), CYAN);
        assert_eq!(color_or_default("not-a-color"), DEFAULT_COLOR);
        assert_eq!(color_or_default("#ff8800"), Rgb::new(255, 136, 0));
    }

    #[test]
    fn test_shade() {
        assert_eq!(shade(WHITE, 0.0), BLACK);
        assert_eq!(shade(WHITE, 1.0), WHITE);
        assert_eq!(shade(AMBER, 1.0), AMBER);
        assert_eq!(shade(AMBER, 0.5), Rgb::new(100, 50, 0));
    }

    #[test]
    fn test_shade_clamps() {
        assert_eq!(shade(AMBER, 2.0), AMBER);
        assert_eq!(shade(AMBER, -1.0), BLACK);
        assert_eq!(shade(AMBER, f32::NAN), BLACK);
    }

    #[test]
    fn test_presets() {
        assert_eq!(PRESET_COLORS.len(), 7);
        assert_eq!(PRESET_COLORS[0].value, WHITE);
        assert_eq!(PRESET_COLORS[1].name, "cyan");
        assert_eq!(PRESET_COLORS[1].value, DEFAULT_COLOR);
        assert_eq!(rgb_from_u32(0x8800FF), Rgb::new(136, 0, 255));
    }
}
