// data.rs - Shipped gallery content
//
// One entry per scene: title, the four carousel faces, then the preview
// grid as (image, caption) pairs. Carousel paths are relative to the
// stylesheet, grid paths to the page.

pub type RawScene = (&'static str, [&'static str; 4], &'static [(&'static str, &'static str)]);

pub const SCENES: &[RawScene] = &[
    (
        "Haute Couture Nights — Paris",
        [
            "../assets/img1.webp",
            "../assets/img2.webp",
            "../assets/img3.webp",
            "../assets/img4.webp",
        ],
        &[
            ("assets/img1.webp", "Kai Vega"),
            ("assets/img2.webp", "Riven Juno"),
            ("assets/img3.webp", "Lex Orion"),
            ("assets/img4.webp", "Ash Kairos"),
            ("assets/img5.webp", "Juno Sol"),
            ("assets/img6.webp", "Soren Nyx"),
            ("assets/img7.webp", "Quinn Axon"),
            ("assets/img8.webp", "Zara Voss"),
            ("assets/img9.webp", "Hale B."),
            ("assets/img10.webp", "Gundra Wex"),
            ("assets/img11.webp", "Extra One"),
            ("assets/img12.webp", "Extra Two"),
        ],
    ),
    (
        "Vogue Evolution — New York City",
        [
            "../assets/img13.webp",
            "../assets/img14.webp",
            "../assets/img15.webp",
            "../assets/img16.webp",
        ],
        &[
            ("assets/img13.webp", "Arlo Quinn"),
            ("assets/img14.webp", "Vera Kline"),
            ("assets/img15.webp", "Juno Vale"),
            ("assets/img16.webp", "Ember Dash"),
            ("assets/img17.webp", "Rylee Voss"),
            ("assets/img18.webp", "Harlow Nova"),
            ("assets/img19.webp", "Blake Lune"),
            // img22 appears twice; kept as authored, flagged by validation.
            ("assets/img22.webp", "Zephyr Kade"),
            ("assets/img21.webp", "Indigo Rae"),
            ("assets/img22.webp", "Kairo Jett"),
            ("assets/img23.webp", "Extra One"),
            ("assets/img24.webp", "Extra Two"),
        ],
    ),
];
