//! Topic registry — the fixed set of mentoring modules.
//!
//! Each [`Module`] pairs a display name and icon with the keyword allow-list
//! that gates questions, plus the instruction prompt that pins the model to
//! the topic. The table is compiled in and immutable; nothing here can fail.

/// One mentoring topic.
///
/// Keywords are stored lowercase; the relevance filter lowercases questions
/// before matching, so the comparison is effectively case-insensitive.
#[derive(Debug)]
pub struct Module {
    name: &'static str,
    icon: &'static str,
    keywords: &'static [&'static str],
}

impl Module {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }

    /// Instruction prompt installed as the session's system message.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are an expert mentor ONLY for {name}.\n\
             \n\
             STRICT RULES:\n\
             - Answer ONLY questions related to {name}\n\
             - If the question is NOT related, reply EXACTLY with:\n\
             \"Sorry, I don't know about this question. Please ask something related to the selected module.\"\n\
             \n\
             ANSWER STYLE:\n\
             - Explain clearly for a beginner\n\
             - Use simple language\n\
             - Give a short definition\n\
             - Give 1 small example if applicable\n\
             - Do NOT mention other domains",
            name = self.name
        )
    }
}

static MODULES: &[Module] = &[
    Module {
        name: "Python",
        icon: "🐍",
        keywords: &["python", "list", "tuple", "dict", "loop", "function", "class"],
    },
    Module {
        name: "SQL",
        icon: "🗄️",
        keywords: &["sql", "select", "join", "where", "group by", "table", "database"],
    },
    Module {
        name: "Power BI",
        icon: "📊",
        keywords: &["power bi", "powerbi", "dax", "pbix", "dashboard", "report", "visual"],
    },
    Module {
        name: "Exploratory Data Analysis (EDA)",
        icon: "📈",
        keywords: &["eda", "outlier", "distribution", "correlation"],
    },
    Module {
        name: "Machine Learning (ML)",
        icon: "🤖",
        keywords: &["machine learning", "ml", "supervised", "unsupervised", "model"],
    },
    Module {
        name: "Deep Learning (DL)",
        icon: "🧠",
        keywords: &["deep learning", "neural network", "cnn", "rnn", "backpropagation"],
    },
    Module {
        name: "Generative AI (Gen AI)",
        icon: "✨",
        keywords: &["generative", "llm", "prompt", "transformer"],
    },
    Module {
        name: "Agentic AI",
        icon: "🧩",
        keywords: &["agent", "tool", "planner", "memory", "autonomous"],
    },
];

/// All modules, in presentation order.
pub fn all_modules() -> &'static [Module] {
    MODULES
}

/// Look up a module by exact name.
pub fn find(name: &str) -> Option<&'static Module> {
    MODULES.iter().find(|m| m.name == name)
}
