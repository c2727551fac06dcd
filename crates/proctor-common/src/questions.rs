//! Built-in question bank: RPA fundamentals and the Leapwork low-code platform.

use crate::types::Question;

/// The static question bank, in canonical order
pub static BUILTIN_QUESTIONS: [Question; 15] = [
    Question::new(
        "What is a key disadvantage of RPA regarding changes in applications?",
        [
            "It easily adapts to UI changes.",
            "It cannot dynamically respond to changes.",
            "It learns from changes over time.",
            "It automatically updates its scripts.",
        ],
        "It cannot dynamically respond to changes.",
    ),
    Question::new(
        "What kind of data does RPA work best with?",
        [
            "Unstructured data.",
            "Semi-structured data.",
            "Structured data.",
            "Any type of data.",
        ],
        "Structured data.",
    ),
    Question::new(
        "What is a potential risk of Leapwork as an RPA tool, according to the document?",
        [
            "Its extremely low cost.",
            "Its inability to automate across technologies.",
            "Potential for vendor lock-in.",
            "Its extensive debugging functionality.",
        ],
        "Potential for vendor lock-in.",
    ),
    Question::new(
        "Which of the following is a benefit of Leapwork as a low-code RPA tool?",
        [
            "High learning curve.",
            "Limited cross-platform compatibility.",
            "No-code, visual platform.",
            "Increased maintenance efforts.",
        ],
        "No-code, visual platform.",
    ),
    Question::new(
        "When is RPA most effective?",
        [
            "For processes requiring human judgment.",
            "For unstable and frequently changing processes.",
            "For repetitive and high-volume tasks.",
            "For processes with low transaction volume.",
        ],
        "For repetitive and high-volume tasks.",
    ),
    Question::new(
        "When should RPA generally be avoided?",
        [
            "When processes are rule-based.",
            "When tasks are error-prone.",
            "When processes require human judgment or intuition.",
            "When there is a clear ROI.",
        ],
        "When processes require human judgment or intuition.",
    ),
    Question::new(
        "What is 'process debt' in the context of RPA?",
        [
            "Automating efficient processes.",
            "Automating broken or inefficient processes.",
            "Reducing maintenance overhead.",
            "Improving process quality.",
        ],
        "Automating broken or inefficient processes.",
    ),
    Question::new(
        "What is a common concern among employees regarding RPA implementation?",
        [
            "Increased job satisfaction.",
            "Job displacement.",
            "Better training opportunities.",
            "More strategic work.",
        ],
        "Job displacement.",
    ),
    Question::new(
        "Leapwork's visual platform makes it accessible to whom?",
        [
            "Only developers.",
            "Only IT professionals.",
            "Business users, QA professionals, and developers.",
            "Only business users.",
        ],
        "Business users, QA professionals, and developers.",
    ),
    Question::new(
        "What kind of processes are NOT suitable for pure RPA if they heavily rely on it?",
        [
            "Processes with structured data.",
            "Processes with unstructured data.",
            "Processes with clear ROI.",
            "Processes with peak demands.",
        ],
        "Processes with unstructured data.",
    ),
    Question::new(
        "What is a major scalability challenge with RPA?",
        [
            "Easy management of thousands of bots.",
            "Managing thousands of individual RPA bots can become complex.",
            "Automatic scaling capabilities.",
            "No maintenance overhead.",
        ],
        "Managing thousands of individual RPA bots can become complex.",
    ),
    Question::new(
        "What type of interface does Leapwork use?",
        [
            "Command-line interface.",
            "Text-based coding interface.",
            "Visual, flowchart-based interface.",
            "Database query interface.",
        ],
        "Visual, flowchart-based interface.",
    ),
    Question::new(
        "What is a key benefit of Leapwork's reusable components?",
        [
            "Increases development time.",
            "Dramatically accelerates development of new automations.",
            "Makes processes more complex.",
            "Reduces consistency across processes.",
        ],
        "Dramatically accelerates development of new automations.",
    ),
    Question::new(
        "Which type of processes should be avoided for RPA implementation?",
        [
            "Stable and mature processes.",
            "Rule-based processes.",
            "Broken or inefficient processes.",
            "High-volume processes.",
        ],
        "Broken or inefficient processes.",
    ),
    Question::new(
        "What is a characteristic of traditional RPA tools regarding intelligence?",
        [
            "They possess advanced AI capabilities.",
            "They can learn from experience.",
            "They are not inherently intelligent.",
            "They make complex decisions automatically.",
        ],
        "They are not inherently intelligent.",
    ),
];
