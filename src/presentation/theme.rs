// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 页面主题
///
/// 启动时构造一次，之后只读，通过 Extension 传给视图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZenTheme {
    pub body_background: &'static str,
    pub body_text: &'static str,
    pub muted_text: &'static str,
    pub button_primary_background: &'static str,
    pub button_primary_background_hover: &'static str,
    pub button_primary_text: &'static str,
    pub button_secondary_background: &'static str,
    pub button_secondary_text: &'static str,
    pub input_background: &'static str,
    pub input_border: &'static str,
    pub input_border_focus: &'static str,
    pub block_background: &'static str,
    pub block_border: &'static str,
    pub radius: &'static str,
    pub fonts: &'static [&'static str],
    pub mono_fonts: &'static [&'static str],
}

impl Default for ZenTheme {
    fn default() -> Self {
        Self::zen()
    }
}

impl ZenTheme {
    /// 和风配色
    pub const fn zen() -> Self {
        Self {
            body_background: "#ffffff",
            body_text: "#3d405b",
            muted_text: "#8b7355",
            button_primary_background: "#d4a574",
            button_primary_background_hover: "#c19660",
            button_primary_text: "#ffffff",
            button_secondary_background: "#f5f2ed",
            button_secondary_text: "#3d405b",
            input_background: "#ffffff",
            input_border: "#d4c4a8",
            input_border_focus: "#d4a574",
            block_background: "#ffffff",
            block_border: "#f5f2ed",
            radius: "4px",
            fonts: &[
                "Hiragino Sans",
                "Noto Sans JP",
                "Yu Gothic",
                "system-ui",
                "sans-serif",
            ],
            mono_fonts: &["SF Mono", "Monaco", "monospace"],
        }
    }

    /// 生成页面样式表
    pub fn stylesheet(&self) -> String {
        format!(
            r#":root {{
  --body-bg: {body_bg};
  --body-text: {body_text};
  --muted-text: {muted};
  --primary-bg: {primary_bg};
  --primary-bg-hover: {primary_hover};
  --primary-text: {primary_text};
  --secondary-bg: {secondary_bg};
  --secondary-text: {secondary_text};
  --input-bg: {input_bg};
  --input-border: {input_border};
  --input-border-focus: {input_focus};
  --block-bg: {block_bg};
  --block-border: {block_border};
  --radius: {radius};
}}
body {{ margin: 0; background: var(--body-bg); color: var(--body-text); font-family: {fonts}; }}
main {{ max-width: 1100px; margin: 0 auto; padding: 2rem; }}
header.hero {{ text-align: center; margin-bottom: 2rem; padding: 2rem; border-radius: 12px;
  background: linear-gradient(135deg, var(--primary-bg) 0%, var(--body-bg) 50%, var(--secondary-bg) 100%); }}
header.hero h1 {{ font-size: 2.5rem; margin: 0 0 .5rem; }}
header.hero p {{ font-size: 1.1rem; opacity: .8; margin: 0; }}
nav.tabs {{ display: flex; gap: .5rem; margin-bottom: 1rem; }}
nav.tabs a {{ padding: .5rem 1rem; border-radius: var(--radius); text-decoration: none;
  background: var(--secondary-bg); color: var(--secondary-text); }}
nav.tabs a.active {{ background: var(--primary-bg); color: var(--primary-text); }}
.columns {{ display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }}
.block {{ background: var(--block-bg); border: 1px solid var(--block-border); border-radius: var(--radius); padding: 1rem; }}
label {{ display: block; font-weight: 600; margin-bottom: .5rem; }}
input[type=text], textarea {{ width: 100%; box-sizing: border-box; padding: .6rem; border-radius: var(--radius);
  background: var(--input-bg); border: 1px solid var(--input-border); font-family: inherit; }}
input[type=text]:focus, textarea:focus {{ outline: none; border-color: var(--input-border-focus); }}
textarea.output {{ font-family: {mono}; min-height: 28rem; }}
button {{ margin-top: .75rem; padding: .6rem 1.4rem; border: 0; border-radius: var(--radius); cursor: pointer;
  background: var(--primary-bg); color: var(--primary-text); font-size: 1rem; }}
button:hover {{ background: var(--primary-bg-hover); }}
ul.downloads {{ padding-left: 1.2rem; }}
.notice {{ color: var(--muted-text); }}
footer {{ text-align: center; margin-top: 2rem; color: var(--muted-text); }}
"#,
            body_bg = self.body_background,
            body_text = self.body_text,
            muted = self.muted_text,
            primary_bg = self.button_primary_background,
            primary_hover = self.button_primary_background_hover,
            primary_text = self.button_primary_text,
            secondary_bg = self.button_secondary_background,
            secondary_text = self.button_secondary_text,
            input_bg = self.input_background,
            input_border = self.input_border,
            input_focus = self.input_border_focus,
            block_bg = self.block_background,
            block_border = self.block_border,
            radius = self.radius,
            fonts = font_stack(self.fonts),
            mono = font_stack(self.mono_fonts),
        )
    }
}

fn font_stack(fonts: &[&str]) -> String {
    fonts
        .iter()
        .map(|font| {
            if font.contains(' ') {
                format!("\"{}\"", font)
            } else {
                font.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
