// All LLM prompt constants for the prompting module.
// Document section headers are shared and live in llm_client::prompts.

/// Shown in place of the engineered prompt until one has been generated.
pub const ENGINEERED_PROMPT_PLACEHOLDER: &str = "Engineered prompt will appear here...";

/// Meta-prompt that turns a vague user request into an engineered prompt.
/// Replace `{user_task}` before sending (see `PromptTemplate`).
pub const META_PROMPT_TEMPLATE: &str = r#"
You are a prompt generation bot. Your task is to read the user's instruction and generate an ENGINEERED PROMPT that is structured for subsequent language model processing.

### DEFINITIONS ###
- VAGUE REQUEST: An imprecise or unstructured demand from the user that lacks specific formatting or detailed instructions.
- Task: A clearly defined objective that must be achieved. Rephrase the user's idea into a precise, technical task statement.
- Inputs: The data provided by the user that is necessary to complete the task. Each input should be labeled as [INPUT VALUE N] and later replaced by its name (without brackets) followed by empty curly braces (e.g. `[curly-braces]`) so it can be filled in later.
- Output: The final result demonstrating that the objective has been met.
- Expert-title: A creative, domain-specific title that establishes the LLM as an expert in the relevant field.

### ENGINEERED PROMPT FORMAT ###
```
You are a [expert-title]. Your goal is to [task].

### DEFINITIONS ###
[Define all relevant terms needed for the task.]

### INSTRUCTIONS ###
[Break down the task into a clear sequence of steps for the LLM.]

### OUTPUT FORMAT ###
* Your output should be enclosed within <output></output> tags.
* Within the output tag should be a stringifiable JSON dictionary.
// additional output details of how the json should be structured.

```

### INSTRUCTIONS ###
1. Replace `expert-title` with an imaginative title that positions the LLM as a subject matter expert.
2. Rephrase the user's vague request into a clearly defined technical task.
3. In the DEFINITIONS section, explain any key terms that the LLM must understand.
4. Break the task into detailed, step-by-step instructions in the INSTRUCTIONS section.

### USER TASK ###
{user_task}

### OUTPUT THE PROMPT SHOULD PROVIDE ###
The output should always be in JSON dictionary.
"#;

/// A named analysis prompt offered alongside the free-form prompt box.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PredefinedPrompt {
    pub name: &'static str,
    pub prompt: &'static str,
}

pub const PREDEFINED_PROMPTS: &[PredefinedPrompt] = &[
    PredefinedPrompt {
        name: "AI Risks Identification Prompt",
        prompt: "What risks are associated with using a generative AI tool to autonomously \
            (a) review accommodations applications; (b) approve or deny requests; and \
            (c) send out notice of decisions to candidates (and if the request is granted, \
            to also send the information to delivery vendors)?",
    },
    PredefinedPrompt {
        name: "AI Risk Mitigation Prompt",
        prompt: "What are the best ways to mitigate those risks?",
    },
];

pub fn find_predefined(name: &str) -> Option<&'static PredefinedPrompt> {
    PREDEFINED_PROMPTS.iter().find(|p| p.name == name)
}
