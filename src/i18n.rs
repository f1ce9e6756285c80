//! i18n module - internationalization support

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// 切换语言 (en <-> zh)
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    pub fn translation(self) -> &'static Translation {
        match self {
            Language::En => &EN_US,
            Language::Zh => &ZH_CN,
        }
    }

    /// Label shown on the language toggle button
    pub fn badge(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Zh => "CN",
        }
    }

    /// Look up a string by key name.
    ///
    /// Unknown keys fall back to the English table; a key unknown there as
    /// well resolves to an empty string.
    pub fn text(self, key: &str) -> &'static str {
        if let Some(value) = self.translation().get(key) {
            return value;
        }
        if self != Language::En {
            if let Some(value) = EN_US.get(key) {
                tracing::warn!(key, lang = ?self, "missing translation, using en");
                return value;
            }
        }
        tracing::warn!(key, "unknown translation key");
        ""
    }
}

pub struct Translation {
    // Navigation
    pub nav_work: &'static str, pub nav_about: &'static str, pub nav_visuals: &'static str,

    // Hero
    pub hero_badge: &'static str,
    pub hero_title_1: &'static str, pub hero_title_clarity: &'static str, pub hero_title_2: &'static str, pub hero_title_3: &'static str,
    pub hero_desc: &'static str,
    pub hero_location: &'static str, pub hero_time: &'static str, pub hero_status: &'static str,
    pub btn_projects: &'static str, pub btn_contact: &'static str,

    // Sections
    pub section_work_title: &'static str, pub section_work_subtitle: &'static str,
    pub section_visuals_title: &'static str, pub section_visuals_subtitle: &'static str,
    pub footer_tagline: &'static str,

    // Project detail
    pub detail_return: &'static str, pub detail_toc: &'static str, pub detail_stats: &'static str,
    pub detail_overview: &'static str, pub detail_background: &'static str, pub detail_role: &'static str,
    pub detail_outcome: &'static str, pub detail_key_outcomes: &'static str, pub detail_not_found: &'static str,

    // About
    pub about_verified: &'static str, pub about_online: &'static str, pub about_decrypting: &'static str,
    pub about_career: &'static str, pub about_modules: &'static str, pub about_skills: &'static str,
    pub about_contact_banner: &'static str,

    // Chat widget
    pub chat_operator: &'static str, pub chat_connected: &'static str, pub chat_loading: &'static str,
    pub chat_placeholder: &'static str, pub chat_send: &'static str,
}

pub const EN_US: Translation = Translation {
    nav_work: "WORK", nav_about: "ABOUT", nav_visuals: "VISUALS",
    hero_badge: "OPEN_TO_WORK :: FINTECH_SECTOR",
    hero_title_1: "Building ", hero_title_clarity: "clarity", hero_title_2: " in", hero_title_3: "complex data.",
    hero_desc: "Senior Product Designer architecting institutional trading platforms and DeFi dashboards. I translate volatility into usability.",
    hero_location: "LOCATION", hero_time: "LOCAL TIME", hero_status: "CURRENT STATUS",
    btn_projects: "VIEW_PROJECTS", btn_contact: "CONTACT_ME",
    section_work_title: "Selected Works", section_work_subtitle: "CASE_STUDIES_2023-2024",
    section_visuals_title: "Visual Logs", section_visuals_subtitle: "STREET_PHOTOGRAPHY // 35MM_DIGITAL",
    footer_tagline: "Building the future of finance, one pixel at a time.",
    detail_return: "Return", detail_toc: "Table of Contents", detail_stats: "Project Stats",
    detail_overview: "Overview", detail_background: "Project Background", detail_role: "My Role",
    detail_outcome: "Summary & Outcome", detail_key_outcomes: "Key Outcomes", detail_not_found: "",
    about_verified: "IDENTITY_VERIFIED", about_online: "ONLINE", about_decrypting: "Decrypting_Bio_Data...",
    about_career: "Career_Trace_Log", about_modules: "Core_Modules", about_skills: "Skill_Heuristic",
    about_contact_banner: "ENCRYPTED CONNECTION ESTABLISHED",
    chat_operator: "OPERATOR", chat_connected: "Connected", chat_loading: "Decrypting...",
    chat_placeholder: "Enter command...", chat_send: "Send",
};

pub const ZH_CN: Translation = Translation {
    nav_work: "作品", nav_about: "关于", nav_visuals: "影像",
    hero_badge: "求职中 :: 金融科技领域",
    hero_title_1: "构建", hero_title_clarity: "清晰", hero_title_2: "", hero_title_3: "复杂数据系统",
    hero_desc: "资深产品设计师，专注于机构交易平台与DeFi仪表盘架构。我致力于将市场波动转化为极致的可用性。",
    hero_location: "位置", hero_time: "当地时间", hero_status: "当前状态",
    btn_projects: "查看项目", btn_contact: "联系我",
    section_work_title: "精选案例", section_work_subtitle: "交互案例_2023-2024",
    section_visuals_title: "视觉日志", section_visuals_subtitle: "街头摄影 // 35MM_数码",
    footer_tagline: "一像素一像素地构建金融的未来。",
    detail_return: "返回", detail_toc: "目录", detail_stats: "项目数据",
    detail_overview: "概览", detail_background: "项目背景", detail_role: "我的角色",
    detail_outcome: "总结与成果", detail_key_outcomes: "关键成果", detail_not_found: "",
    about_verified: "身份已验证", about_online: "在线", about_decrypting: "正在解密履历...",
    about_career: "职业轨迹", about_modules: "核心模块", about_skills: "技能指数",
    about_contact_banner: "加密连接已建立",
    chat_operator: "接线员", chat_connected: "已连接", chat_loading: "解密中...",
    chat_placeholder: "输入指令...", chat_send: "发送",
};

impl Translation {
    /// 按键名查找 (the nav bar resolves its labels this way)
    pub fn get(&self, key: &str) -> Option<&'static str> {
        let value = match key {
            "nav_work" => self.nav_work,
            "nav_about" => self.nav_about,
            "nav_visuals" => self.nav_visuals,
            "hero_badge" => self.hero_badge,
            "hero_title_1" => self.hero_title_1,
            "hero_title_clarity" => self.hero_title_clarity,
            "hero_title_2" => self.hero_title_2,
            "hero_title_3" => self.hero_title_3,
            "hero_desc" => self.hero_desc,
            "hero_location" => self.hero_location,
            "hero_time" => self.hero_time,
            "hero_status" => self.hero_status,
            "btn_projects" => self.btn_projects,
            "btn_contact" => self.btn_contact,
            "section_work_title" => self.section_work_title,
            "section_work_subtitle" => self.section_work_subtitle,
            "section_visuals_title" => self.section_visuals_title,
            "section_visuals_subtitle" => self.section_visuals_subtitle,
            "footer_tagline" => self.footer_tagline,
            "detail_return" => self.detail_return,
            "detail_toc" => self.detail_toc,
            "detail_stats" => self.detail_stats,
            "detail_overview" => self.detail_overview,
            "detail_background" => self.detail_background,
            "detail_role" => self.detail_role,
            "detail_outcome" => self.detail_outcome,
            "detail_key_outcomes" => self.detail_key_outcomes,
            "detail_not_found" => self.detail_not_found,
            "about_verified" => self.about_verified,
            "about_online" => self.about_online,
            "about_decrypting" => self.about_decrypting,
            "about_career" => self.about_career,
            "about_modules" => self.about_modules,
            "about_skills" => self.about_skills,
            "about_contact_banner" => self.about_contact_banner,
            "chat_operator" => self.chat_operator,
            "chat_connected" => self.chat_connected,
            "chat_loading" => self.chat_loading,
            "chat_placeholder" => self.chat_placeholder,
            "chat_send" => self.chat_send,
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut lang = Language::En;
        lang.toggle();
        assert_eq!(lang, Language::Zh);
        lang.toggle();
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn test_tables_do_not_mix() {
        assert_eq!(Language::En.translation().nav_work, "WORK");
        assert_eq!(Language::Zh.translation().nav_work, "作品");
        assert_eq!(Language::Zh.text("nav_about"), "关于");
        assert_eq!(Language::En.text("nav_about"), "ABOUT");
    }

    #[test]
    fn test_unknown_key_is_empty() {
        assert_eq!(Language::Zh.text("no_such_key"), "");
        assert_eq!(Language::En.text("no_such_key"), "");
    }

    #[test]
    fn test_empty_value_is_not_a_miss() {
        // 中文标题第二段本来就是空串
        assert_eq!(ZH_CN.get("hero_title_2"), Some(""));
    }
}
