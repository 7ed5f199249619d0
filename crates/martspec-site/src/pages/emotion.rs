//! Emotion app landing page.

use crate::components::{
    AppStoreButton, BulletList, CallToAction, Header, IconTitleText, IconTitleTextList,
    LocalizedImage, Review, TitleTextCard,
};
use crate::pages::Page;
use crate::render::{Block, Component, Link, LinkStyle, RenderContext};

/// Accent colour used across the page.
pub const EMOTION_THEME: &str = "#7B62FE";

const PURPLE: &str = "#EDE1FF";
const YELLOW: &str = "#FFF9E3";
const GREEN: &str = "#E8FAE0";
const GRAY: &str = "gray";

/// Landing page for the Emotion app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmotionPage;

impl Page for EmotionPage {
    fn slug(&self) -> &'static str {
        "emotion"
    }

    fn title_key(&self) -> &'static str {
        "EMOTION.HEAD"
    }

    fn body(&self, ctx: &RenderContext<'_>) -> Vec<Block> {
        let mut blocks = header().render(ctx);
        blocks.extend([
            section(None, render_all(ctx, &feature_cards())),
            color_test(ctx),
            biorhythms(ctx),
            stress(ctx),
            personality_test(ctx),
            section(
                Some(GRAY),
                [heading(ctx, "EMOTION.HEAD5")]
                    .into_iter()
                    .chain(advantages().render(ctx))
                    .collect(),
            ),
            traits(ctx),
            benefits(ctx),
        ]);
        blocks.extend(Review::new(EMOTION_THEME).render(ctx));
        blocks.extend(
            CallToAction::new("EMOTION.HEAD8")
                .subtitle("EMOTION.DESK8")
                .download("EMOTION.DWN")
                .image("/img/page/emotion/img-cta-en.webp", Some("EMOTION.ALT4"))
                .render(ctx),
        );
        blocks
    }
}

fn header() -> Header {
    Header {
        title_key: "EMOTION.HEAD",
        download: AppStoreButton {
            title_key: "EMOTION.DWN",
        },
        image: LocalizedImage::new(
            "/img/page/emotion/emotion-header-img-en.webp",
            "EMOTION.IMG",
            550,
            405,
        ),
        body: BulletList::new(["EMOTION.ABOUT_1", "EMOTION.ABOUT_2", "EMOTION.ABOUT_3"]),
    }
}

const fn feature_cards() -> [TitleTextCard; 4] {
    [
        TitleTextCard::new("EMOTION.LIST1.LI1_HEAD", "EMOTION.LIST1.LI1_TEXT", PURPLE),
        TitleTextCard::new("EMOTION.LIST1.LI2_HEAD", "EMOTION.LIST1.LI2_TEXT", YELLOW),
        TitleTextCard::new("EMOTION.LIST1.LI3_HEAD", "EMOTION.LIST1.LI3_TEXT", PURPLE),
        TitleTextCard::new("EMOTION.LIST1.LI4_HEAD", "EMOTION.LIST1.LI4_TEXT", YELLOW),
    ]
}

fn color_test(ctx: &RenderContext<'_>) -> Block {
    section(
        None,
        vec![
            heading(ctx, "EMOTION.HEAD1"),
            paragraph(ctx, "EMOTION.DESK1"),
            button(ctx, "EMOTION.BTN1", "emotion/color-test"),
            image(
                ctx,
                "/img/page/emotion/emotion-screen-april-en.webp",
                "EMOTION.ALT1",
                (512, 598),
            ),
        ],
    )
}

fn biorhythms(ctx: &RenderContext<'_>) -> Block {
    let mut blocks = vec![
        image(
            ctx,
            "/img/page/emotion/emotion-diagram.webp",
            "EMOTION.ALT2",
            (512, 367),
        ),
        heading(ctx, "EMOTION.HEAD2"),
        paragraph(ctx, "EMOTION.DESK2"),
        button(ctx, "EMOTION.BTN_BIORHYTHM", "emotion/biorhythms"),
    ];
    let cards = [
        TitleTextCard::new("EMOTION.LIST2.LI1_HEAD", "EMOTION.LIST2.LI1_TEXT", YELLOW),
        TitleTextCard::new("EMOTION.LIST2.LI2_HEAD", "EMOTION.LIST2.LI2_TEXT", GREEN),
        TitleTextCard::new("EMOTION.LIST2.LI3_HEAD", "EMOTION.LIST2.LI3_TEXT", PURPLE),
    ];
    blocks.extend(render_all(ctx, &cards));
    section(Some(GRAY), blocks)
}

fn stress(ctx: &RenderContext<'_>) -> Block {
    let mut blocks = vec![
        heading(ctx, "EMOTION.HEAD3"),
        paragraph(ctx, "EMOTION.DESK3_1"),
        Block::Heading {
            level: 3,
            text: ctx.t("EMOTION.DESK3_2"),
        },
    ];
    blocks.extend(BulletList::new(STRESS_STATES).render(ctx));
    blocks.push(image(
        ctx,
        "/img/page/emotion/emotion-screen-stress-en.webp",
        "EMOTION.ALT3",
        (512, 443),
    ));
    section(None, blocks)
}

const STRESS_STATES: [&str; 5] = [
    "EMOTION.LIST3.LI1_TEXT",
    "EMOTION.LIST3.LI2_TEXT",
    "EMOTION.LIST3.LI3_TEXT",
    "EMOTION.LIST3.LI4_TEXT",
    "EMOTION.LIST3.LI5_TEXT",
];

fn personality_test(ctx: &RenderContext<'_>) -> Block {
    let mut blocks = vec![
        image(
            ctx,
            "/img/page/emotion/emotion-screen-test-en.webp",
            "EMOTION.ALT4",
            (390, 512),
        ),
        heading(ctx, "EMOTION.HEAD4"),
        paragraph(ctx, "EMOTION.DESK4_1"),
        Block::Heading {
            level: 3,
            text: ctx.t("EMOTION.DESK4_2"),
        },
    ];
    blocks.extend(
        BulletList::new([
            "EMOTION.LIST4.LI1_TEXT",
            "EMOTION.LIST4.LI2_TEXT",
            "EMOTION.LIST4.LI3_TEXT",
            "EMOTION.LIST4.LI4_TEXT",
            "EMOTION.LIST4.LI5_TEXT",
            "EMOTION.LIST4.LI6_TEXT",
        ])
        .with_marker_color(EMOTION_THEME)
        .render(ctx),
    );
    section(None, blocks)
}

fn advantages() -> IconTitleTextList {
    let entry = |icon, alt, title, text| IconTitleText {
        icon,
        icon_alt_key: Some(alt),
        title_key: title,
        text_key: text,
    };
    IconTitleTextList {
        items: vec![
            entry(
                "/img/atom/icons/icon-defense.svg",
                "EMOTION.ALT5_1",
                "EMOTION.LIST5.LI1_HEAD",
                "EMOTION.LIST5.LI1_TEXT",
            ),
            entry(
                "/img/atom/icons/icon-sync.svg",
                "EMOTION.ALT5_2",
                "EMOTION.LIST5.LI2_HEAD",
                "EMOTION.LIST5.LI2_TEXT",
            ),
            entry(
                "/img/atom/icons/icon-no-auth.svg",
                "EMOTION.ALT5_3",
                "EMOTION.LIST5.LI3_HEAD",
                "EMOTION.LIST5.LI3_TEXT",
            ),
            entry(
                "/img/atom/icons/icon-no-ads.svg",
                "EMOTION.ALT5_4",
                "EMOTION.LIST5.LI4_HEAD",
                "EMOTION.LIST5.LI4_TEXT",
            ),
        ],
    }
}

/// Personality traits, each with its card colour and detail page.
const TRAITS: [(&str, &str, &str, &str); 6] = [
    ("EMOTION.LIST6.LI1_HEAD", "EMOTION.LIST6.LI1_TEXT", "violet", "emotion/anxiety"),
    ("EMOTION.LIST6.LI2_HEAD", "EMOTION.LIST6.LI2_TEXT", "green", "emotion/productivity"),
    ("EMOTION.LIST6.LI3_HEAD", "EMOTION.LIST6.LI3_TEXT", "aqua", "emotion/harmony"),
    ("EMOTION.LIST6.LI4_HEAD", "EMOTION.LIST6.LI4_TEXT", "orange", "emotion/independence"),
    ("EMOTION.LIST6.LI5_HEAD", "EMOTION.LIST6.LI5_TEXT", "yellow", "emotion/energy"),
    ("EMOTION.LIST6.LI6_HEAD", "EMOTION.LIST6.LI6_TEXT", "blue", "emotion/openness"),
];

fn traits(ctx: &RenderContext<'_>) -> Block {
    let cards: Vec<TitleTextCard> = TRAITS
        .iter()
        .map(|&(title, text, background, path)| {
            TitleTextCard::new(title, text, background).with_link("EMOTION.LIST6.BTN", path)
        })
        .collect();
    let mut blocks = vec![heading(ctx, "EMOTION.HEAD6")];
    blocks.extend(render_all(ctx, &cards));
    section(Some(GRAY), blocks)
}

const BENEFIT_KEYS: [(&str, &str); 6] = [
    ("EMOTION.LIST7.LI1_HEAD", "EMOTION.LIST7.LI1_TEXT"),
    ("EMOTION.LIST7.LI2_HEAD", "EMOTION.LIST7.LI2_TEXT"),
    ("EMOTION.LIST7.LI3_HEAD", "EMOTION.LIST7.LI3_TEXT"),
    ("EMOTION.LIST7.LI4_HEAD", "EMOTION.LIST7.LI4_TEXT"),
    ("EMOTION.LIST7.LI5_HEAD", "EMOTION.LIST7.LI5_TEXT"),
    ("EMOTION.LIST7.LI6_HEAD", "EMOTION.LIST7.LI6_TEXT"),
];
const BENEFIT_ICON_PATHS: [&str; 6] = [
    "/img/atom/icons/icon-sport.svg",
    "/img/atom/icons/icon-bag.svg",
    "/img/atom/icons/icon-health.svg",
    "/img/atom/icons/icon-research.svg",
    "/img/atom/icons/icon-note.svg",
    "/img/atom/icons/icon-heart.svg",
];

fn benefits(ctx: &RenderContext<'_>) -> Block {
    let list = IconTitleTextList {
        items: BENEFIT_ICON_PATHS
            .iter()
            .zip(BENEFIT_KEYS)
            .map(|(&icon, (title_key, text_key))| IconTitleText {
                icon,
                icon_alt_key: None,
                title_key,
                text_key,
            })
            .collect(),
    };
    let mut blocks = vec![
        heading(ctx, "EMOTION.HEAD7"),
        paragraph(ctx, "EMOTION.DESK7"),
    ];
    blocks.extend(list.render(ctx));
    section(None, blocks)
}

fn render_all<C: Component>(ctx: &RenderContext<'_>, components: &[C]) -> Vec<Block> {
    components
        .iter()
        .flat_map(|component| component.render(ctx))
        .collect()
}

fn section(background: Option<&str>, blocks: Vec<Block>) -> Block {
    Block::Section {
        background: background.map(str::to_string),
        blocks,
    }
}

fn heading(ctx: &RenderContext<'_>, key: &str) -> Block {
    Block::Heading {
        level: 2,
        text: ctx.t(key),
    }
}

fn paragraph(ctx: &RenderContext<'_>, key: &str) -> Block {
    Block::Paragraph { text: ctx.t(key) }
}

fn button(ctx: &RenderContext<'_>, label_key: &str, path: &str) -> Block {
    Block::Link(Link {
        label: ctx.t(label_key),
        href: ctx.link(path),
        style: LinkStyle::Button,
    })
}

fn image(
    ctx: &RenderContext<'_>,
    src: &'static str,
    alt_key: &'static str,
    (width, height): (u32, u32),
) -> Block {
    LocalizedImage::new(src, alt_key, width, height).block(ctx, String::new)
}
