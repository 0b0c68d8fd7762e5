// render.rs - Scene table to page markup
//
// Output structure (class names are the stylesheet contract):
//   div[.loading]            root, mask class only while masked
//     header.frame           title, links, tags
//     main#smooth-content    .scene-wrapper > .scene* (title + 4-card carousel)
//     div.preview-wrapper    .preview#preview-N* (header + image grid)

use std::borrow::Cow;
use std::fmt::Write;

use crate::config::{Frame, GalleryConfig, Link};
use crate::preview;
use crate::scene::{GridItem, Scene, SceneTable};

const TITLE_SPEED: &str = "0.7";

pub struct Markup {
    out: String,
}

impl Markup {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    pub fn clear(&mut self) {
        self.out.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn into_string(self) -> String {
        self.out
    }

    /// Whole page including the root container.
    pub fn page(&mut self, table: &SceneTable, config: &GalleryConfig, masked: bool) {
        let class = if masked { config.mask_class.as_str() } else { "" };
        let _ = write!(self.out, "<div class=\"{}\">", escape(class));
        self.content(table, config);
        self.out.push_str("</div>");
    }

    /// Everything inside the root container.
    pub fn content(&mut self, table: &SceneTable, config: &GalleryConfig) {
        self.frame(&config.frame);

        self.out.push_str("<main id=\"smooth-content\"><div class=\"scene-wrapper\">");
        for (i, scene) in table.scenes().iter().enumerate() {
            self.scene(i, scene);
        }
        self.out.push_str("</div></main>");

        self.out.push_str("<div class=\"preview-wrapper\">");
        for (i, scene) in table.scenes().iter().enumerate() {
            self.preview(i, scene);
        }
        self.out.push_str("</div>");
    }

    fn frame(&mut self, frame: &Frame) {
        let _ = write!(
            self.out,
            "<header class=\"frame\"><h1 class=\"frame__title\">{}</h1>",
            escape(&frame.title)
        );
        self.links("frame__links", &frame.links);
        self.links("frame__tags", &frame.tags);
        self.out.push_str("</header>");
    }

    fn links(&mut self, class: &str, links: &[Link]) {
        if links.is_empty() {
            return;
        }
        let _ = write!(self.out, "<nav class=\"{}\">", class);
        for link in links {
            let _ = write!(
                self.out,
                "<a class=\"line\" href=\"{}\">{}</a>",
                escape(&link.href),
                escape(&link.label)
            );
        }
        self.out.push_str("</nav>");
    }

    fn scene(&mut self, i: usize, scene: &Scene) {
        let _ = write!(
            self.out,
            "<div class=\"scene\"><h2 class=\"scene__title\" data-speed=\"{}\">\
             <a href=\"{}\"><span>{}</span></a></h2><div class=\"carousel\">",
            TITLE_SPEED,
            preview::fragment(i),
            escape(&scene.title)
        );
        for image in &scene.images {
            self.card(image);
        }
        self.out.push_str("</div></div>");
    }

    fn card(&mut self, image: &str) {
        let _ = write!(
            self.out,
            "<div class=\"carousel__cell\"><div class=\"card\" style=\"--img: url({})\">\
             <div class=\"card__face card__face--front\"></div>\
             <div class=\"card__face card__face--back\"></div></div></div>",
            escape(image)
        );
    }

    fn preview(&mut self, i: usize, scene: &Scene) {
        let _ = write!(
            self.out,
            "<div class=\"preview\" id=\"{}\"><header class=\"preview__header\">\
             <h2 class=\"preview__title\"><span>{}</span></h2>\
             <button class=\"preview__close\" data-index=\"{}\">Close ×</button></header>\
             <div class=\"grid\">",
            preview::element_id(i),
            escape(&scene.title),
            i
        );
        for (j, item) in scene.grid_items.iter().enumerate() {
            self.grid_item(i, j, item);
        }
        self.out.push_str("</div></div>");
    }

    fn grid_item(&mut self, scene: usize, item_index: usize, item: &GridItem) {
        let id = format!("caption-{}-{}", scene + 1, item_index + 1);
        let _ = write!(
            self.out,
            "<figure aria-labelledby=\"{id}\" class=\"grid__item\" role=\"img\">\
             <div class=\"grid__item-image\" style=\"background-image: url({})\"></div>\
             <figcaption class=\"grid__item-caption\" id=\"{id}\"><h3>{}</h3></figcaption></figure>",
            escape(&item.image),
            escape(&item.caption)
        );
    }
}

impl Default for Markup {
    fn default() -> Self {
        Self::new()
    }
}

pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
