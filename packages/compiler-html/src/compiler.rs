use pagecraft_model::{
    Document, Feature, ImageAsset, ListItem, Section, SectionContent, SectionStyles, SeedError,
    SocialLinks,
};
use thiserror::Error;

/// Errors that can occur during page compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("invalid document: {0}")]
    InvalidDocument(#[from] SeedError),
}

/// Options for page compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Page title emitted into the head
    pub title: String,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            title: "Landing Page".to_string(),
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a Pagecraft document to a standalone HTML page.
///
/// Sections are emitted in document order. The document invariants are
/// checked first; duplicate ids would otherwise leak into duplicate HTML
/// anchors.
pub fn compile_to_html(
    document: &Document,
    options: CompileOptions,
) -> Result<String, CompileError> {
    document.validate()?;

    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.indent();

    compile_head(&mut ctx);

    ctx.add_line("<body>");
    ctx.indent();

    for section in &document.sections {
        compile_section(section, &mut ctx);
    }

    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    Ok(ctx.get_output())
}

fn compile_head(ctx: &mut Context) {
    let title = escape_html(&ctx.options.title);

    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", title));

    // Template shell: the few structural rules the inline styles build on,
    // embedded so the artifact needs no external fetch.
    ctx.add_line("<style>");
    ctx.indent();
    ctx.add_line("* { box-sizing: border-box; }");
    ctx.add_line("body { margin: 0; font-family: system-ui, -apple-system, sans-serif; }");
    ctx.add_line(".container { max-width: 1100px; margin: 0 auto; padding: 0 1rem; }");
    ctx.add_line("img { max-width: 100%; display: block; }");
    ctx.add_line("a { color: inherit; }");
    ctx.add_line(".hero { position: relative; min-height: 500px; display: flex; align-items: center; justify-content: center; overflow: hidden; }");
    ctx.add_line(".hero-media { position: absolute; inset: 0; background-size: cover; background-position: center; }");
    ctx.add_line(".hero-overlay { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.6); }");
    ctx.add_line(".hero .container { position: relative; }");
    ctx.add_line(".columns { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }");
    ctx.add_line(".cards { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }");
    ctx.add_line(".card { background: rgba(255, 255, 255, 0.1); border: 1px solid rgba(255, 255, 255, 0.2); border-radius: 0.5rem; padding: 1.5rem; }");
    ctx.add_line(".features { list-style: none; margin: 0; padding: 0; }");
    ctx.add_line(".features li { margin-bottom: 1rem; }");
    ctx.add_line(".portrait { width: 6rem; height: 6rem; border-radius: 50%; object-fit: cover; margin: 0 auto 1.5rem; }");
    ctx.add_line(".social { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; padding: 0; list-style: none; }");
    ctx.add_line("@media (max-width: 768px) { .columns, .cards { grid-template-columns: 1fr; } }");
    ctx.dedent();
    ctx.add_line("</style>");

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_section(section: &Section, ctx: &mut Context) {
    let styles = &section.styles;

    ctx.add_line(&format!(
        "<section id=\"{}\" style=\"background-color: {}; color: {}; text-align: {}; padding: {} 0;\">",
        escape_html(&section.id),
        escape_html(&styles.background_color),
        escape_html(&styles.text_color),
        styles.text_align.as_str(),
        escape_html(&styles.padding_y),
    ));
    ctx.indent();

    match &section.content {
        SectionContent::Header { logo_text } => compile_header(logo_text, styles, ctx),
        SectionContent::Hero {
            title,
            subtitle,
            image,
        } => compile_hero(title, subtitle, image, styles, ctx),
        SectionContent::WhyUs {
            title,
            description,
            image,
            features,
        } => compile_why_us(title, description, image, features, styles, ctx),
        SectionContent::Academic {
            title,
            description,
            image,
        } => compile_academic(title, description, image, styles, ctx),
        SectionContent::Jobs {
            title,
            description,
            button_text,
            items,
        } => compile_jobs(title, description, button_text.as_deref(), items, styles, ctx),
        SectionContent::Institutional {
            title,
            description,
            image,
            ceo_image_url,
        } => compile_institutional(
            title,
            description,
            image,
            ceo_image_url.as_deref(),
            styles,
            ctx,
        ),
        SectionContent::Footer {
            title,
            subtitle,
            ceo_image_url,
            social_links,
        } => compile_footer(
            title,
            subtitle,
            ceo_image_url.as_deref(),
            social_links,
            styles,
            ctx,
        ),
    }

    ctx.dedent();
    ctx.add_line("</section>");
}

fn compile_header(logo_text: &str, styles: &SectionStyles, ctx: &mut Context) {
    ctx.add_line("<div class=\"container\">");
    ctx.indent();
    ctx.add_line(&format!(
        "<span style=\"color: {}; font-size: {}; font-weight: bold;\">{}</span>",
        escape_html(&styles.accent_color),
        escape_html(&styles.font_size_title),
        escape_html(logo_text),
    ));
    ctx.dedent();
    ctx.add_line("</div>");
}

fn compile_hero(
    title: &str,
    subtitle: &str,
    image: &ImageAsset,
    styles: &SectionStyles,
    ctx: &mut Context,
) {
    ctx.add_line("<div class=\"hero\">");
    ctx.indent();

    ctx.add_line(&format!(
        "<div class=\"hero-media\" style=\"background-image: url('{}'); {}\"></div>",
        escape_html(&image.url),
        brightness_filter(image),
    ));
    ctx.add_line("<div class=\"hero-overlay\"></div>");

    ctx.add_line("<div class=\"container\">");
    ctx.indent();
    ctx.add_line(&format!(
        "<h1 style=\"font-size: {};\">{}</h1>",
        escape_html(&styles.font_size_title),
        escape_html(title),
    ));
    ctx.add_line(&format!(
        "<p style=\"font-size: {};\">{}</p>",
        escape_html(&styles.font_size_body),
        escape_html(subtitle),
    ));
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.dedent();
    ctx.add_line("</div>");
}

fn compile_why_us(
    title: &str,
    description: &str,
    image: &ImageAsset,
    features: &[Feature],
    styles: &SectionStyles,
    ctx: &mut Context,
) {
    ctx.add_line("<div class=\"container columns\">");
    ctx.indent();

    ctx.add_line("<div>");
    ctx.indent();
    compile_heading(title, styles, ctx);
    compile_body_text(description, styles, ctx);
    ctx.add_line("<ul class=\"features\">");
    ctx.indent();
    for feature in features {
        ctx.add_line(&format!(
            "<li><strong>{}</strong><br>{}</li>",
            escape_html(&feature.title),
            escape_html(&feature.desc),
        ));
    }
    ctx.dedent();
    ctx.add_line("</ul>");
    ctx.dedent();
    ctx.add_line("</div>");

    compile_side_image(image, "Why us", ctx);

    ctx.dedent();
    ctx.add_line("</div>");
}

fn compile_academic(
    title: &str,
    description: &str,
    image: &ImageAsset,
    styles: &SectionStyles,
    ctx: &mut Context,
) {
    ctx.add_line("<div class=\"container columns\">");
    ctx.indent();

    compile_side_image(image, "Academic program", ctx);

    ctx.add_line("<div>");
    ctx.indent();
    compile_heading(title, styles, ctx);
    compile_body_text(description, styles, ctx);
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.dedent();
    ctx.add_line("</div>");
}

fn compile_jobs(
    title: &str,
    description: &str,
    button_text: Option<&str>,
    items: &[ListItem],
    styles: &SectionStyles,
    ctx: &mut Context,
) {
    ctx.add_line("<div class=\"container\">");
    ctx.indent();

    compile_heading(title, styles, ctx);
    compile_body_text(description, styles, ctx);

    ctx.add_line("<div class=\"cards\">");
    ctx.indent();
    for item in items {
        ctx.add_line("<div class=\"card\">");
        ctx.indent();
        if let Some(url) = &item.image_url {
            ctx.add_line(&format!(
                "<img src=\"{}\" alt=\"{}\">",
                escape_html(url),
                escape_html(&item.text),
            ));
        }
        ctx.add_line(&format!("<p>{}</p>", escape_html(&item.text)));
        ctx.dedent();
        ctx.add_line("</div>");
    }
    ctx.dedent();
    ctx.add_line("</div>");

    if let Some(text) = button_text {
        ctx.add_line(&format!(
            "<p><a href=\"#\" style=\"background-color: {}; color: #ffffff; padding: 0.75rem 1.5rem; border-radius: 0.5rem; text-decoration: none; display: inline-block;\">{}</a></p>",
            escape_html(&styles.accent_color),
            escape_html(text),
        ));
    }

    ctx.dedent();
    ctx.add_line("</div>");
}

fn compile_institutional(
    title: &str,
    description: &str,
    image: &ImageAsset,
    ceo_image_url: Option<&str>,
    styles: &SectionStyles,
    ctx: &mut Context,
) {
    ctx.add_line("<div class=\"container columns\">");
    ctx.indent();

    ctx.add_line("<div>");
    ctx.indent();
    compile_heading(title, styles, ctx);
    if let Some(url) = ceo_image_url {
        ctx.add_line(&format!(
            "<img class=\"portrait\" src=\"{}\" alt=\"CEO\">",
            escape_html(url),
        ));
    }
    compile_body_text(description, styles, ctx);
    ctx.dedent();
    ctx.add_line("</div>");

    compile_side_image(image, "Institutional", ctx);

    ctx.dedent();
    ctx.add_line("</div>");
}

fn compile_footer(
    title: &str,
    subtitle: &str,
    ceo_image_url: Option<&str>,
    links: &SocialLinks,
    styles: &SectionStyles,
    ctx: &mut Context,
) {
    ctx.add_line("<div class=\"container\">");
    ctx.indent();

    if let Some(url) = ceo_image_url {
        ctx.add_line(&format!(
            "<img class=\"portrait\" src=\"{}\" alt=\"CEO\">",
            escape_html(url),
        ));
    }
    compile_heading(title, styles, ctx);
    ctx.add_line(&format!("<p>{}</p>", escape_html(subtitle)));

    ctx.add_line("<ul class=\"social\">");
    ctx.indent();
    compile_social_link("Instagram", &links.instagram, ctx);
    compile_social_link("Facebook", &links.facebook, ctx);
    compile_social_link("YouTube", &links.youtube, ctx);
    compile_social_link("TikTok", &links.tiktok, ctx);
    if let Some(url) = &links.linktree {
        compile_social_link("Linktree", url, ctx);
    }
    compile_whatsapp_link("WhatsApp LATAM", &links.whatsapp_latam, ctx);
    compile_whatsapp_link("WhatsApp US", &links.whatsapp_us, ctx);
    ctx.dedent();
    ctx.add_line("</ul>");

    ctx.add_line(&format!(
        "<p style=\"opacity: 0.5; font-size: 0.875rem;\">&copy; {}. All rights reserved.</p>",
        escape_html(title),
    ));

    ctx.dedent();
    ctx.add_line("</div>");
}

fn compile_heading(title: &str, styles: &SectionStyles, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<h2 style=\"color: {}; font-size: {};\">{}</h2>",
        escape_html(&styles.accent_color),
        escape_html(&styles.font_size_title),
        escape_html(title),
    ));
}

fn compile_body_text(text: &str, styles: &SectionStyles, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<p style=\"font-size: {}; white-space: pre-line;\">{}</p>",
        escape_html(&styles.font_size_body),
        escape_html(text),
    ));
}

fn compile_side_image(image: &ImageAsset, alt: &str, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<img src=\"{}\" alt=\"{}\" style=\"border-radius: 0.75rem; {}\">",
        escape_html(&image.url),
        escape_html(alt),
        brightness_filter(image),
    ));
}

fn compile_social_link(label: &str, url: &str, ctx: &mut Context) {
    if url.is_empty() {
        return;
    }
    ctx.add_line(&format!(
        "<li><a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a></li>",
        escape_html(url),
        escape_html(label),
    ));
}

fn compile_whatsapp_link(label: &str, phone: &str, ctx: &mut Context) {
    let digits = digits_only(phone);
    if digits.is_empty() {
        return;
    }
    ctx.add_line(&format!(
        "<li><a href=\"https://wa.me/{}\" target=\"_blank\" rel=\"noreferrer\">{}</a></li>",
        digits,
        escape_html(label),
    ));
}

/// Brightness is a pure presentation filter; 100 is a no-op and is elided.
fn brightness_filter(image: &ImageAsset) -> String {
    if image.brightness == 100 {
        String::new()
    } else {
        format!("filter: brightness({}%);", image.brightness)
    }
}

fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
