//! Frozen prompt templates and decision keyword lists.
//!
//! The observable behavior of the verifier is the set of (prompt, decision
//! predicate) pairs in this module. Changing any entry changes results, so
//! everything is a named constant and nothing is built at runtime except
//! the per-language battery prompts.

/// Responsiveness probe. Success is HTTP 200 with at least one choice.
pub const PONG: &str = "Hello, respond with 'pong'";

/// Model self-identification, phase 4 of the driver.
pub const SELF_IDENTIFY: &str = "What model are you? Reply with only your model name.";

// ---------------------------------------------------------------------------
// Tool use
// ---------------------------------------------------------------------------

pub const TOOL_USE: &str = "What is the weather in Paris right now?";
pub const PARALLEL_TOOL_USE: &str = "Check the weather in Paris and the current time in Tokyo.";

// ---------------------------------------------------------------------------
// Code classes
// ---------------------------------------------------------------------------

pub const CODE_GENERATION: &str = "Write a Python function that adds two numbers.";
pub const CODE_COMPLETION: &str =
    "Complete this Python function:\ndef add(a, b):\n    return";
pub const CODE_REVIEW: &str =
    "Review this code and point out any problems:\ndef div(a, b):\n    return a / b";
pub const CODE_EXPLANATION: &str =
    "Explain what this function does:\ndef add(a, b):\n    return a + b";
pub const DEBUGGING: &str = "Find the bug in this code:\ndef average(xs):\n    return sum(xs) / len(xs)\nWhat happens when xs is empty?";
pub const OPTIMIZATION: &str = "How would you optimize this code?\nresult = []\nfor x in items:\n    if x in seen_list:\n        result.append(x)";
pub const TEST_GENERATION: &str =
    "Write unit tests for this function:\ndef add(a, b):\n    return a + b";
pub const DOCUMENTATION: &str =
    "Write a docstring for this function:\ndef add(a, b):\n    return a + b";
pub const REFACTORING: &str = "Refactor this code to remove the duplication:\nprint(a + 1)\nprint(b + 1)\nprint(c + 1)";
pub const ERROR_RESOLUTION: &str =
    "This code raises NameError: name 'resutl' is not defined:\nprint(resutl)\nHow do I fix it?";
pub const ARCHITECTURE: &str =
    "Describe a software architecture for a URL shortener service.";
pub const SECURITY: &str = "What security problems does this code have?\nquery = \"SELECT * FROM users WHERE name = '\" + name + \"'\"";
pub const PATTERN_RECOGNITION: &str = "Which design pattern does this code use?\nclass Config:\n    _instance = None\n    @classmethod\n    def get(cls):\n        if cls._instance is None:\n            cls._instance = Config()\n        return cls._instance";

pub const DEBUGGING_TERMS: &[&str] = &["error", "bug", "exception", "empty", "divide by zero"];
pub const REVIEW_TERMS: &[&str] = &["issue", "improve", "suggest", "bug", "error", "problem"];
pub const EXPLANATION_TERMS: &[&str] = &["function", "returns", "adds", "sum", "calculates"];
pub const OPTIMIZATION_TERMS: &[&str] =
    &["optimiz", "performance", "efficien", "complexity", "faster", "set"];
pub const TEST_TERMS: &[&str] = &["test", "assert"];
pub const DOCUMENTATION_TERMS: &[&str] = &["\"\"\"", "/**", "param", "return", "doc"];
pub const ERROR_RESOLUTION_TERMS: &[&str] =
    &["fix", "correct", "typo", "replace", "should be", "rename"];
pub const ARCHITECTURE_TERMS: &[&str] =
    &["architecture", "component", "layer", "service", "database", "design"];
pub const SECURITY_TERMS: &[&str] =
    &["injection", "sanitiz", "security", "vulnerab", "parameteriz", "escape"];
pub const PATTERN_TERMS: &[&str] = &["singleton", "pattern", "factory", "observer", "instance"];

// ---------------------------------------------------------------------------
// Format / protocol
// ---------------------------------------------------------------------------

pub const JSON_MODE: &str =
    "Return a JSON object with keys \"name\" and \"version\" describing yourself.";
pub const STRUCTURED_OUTPUT: &str =
    "Respond with only this JSON object and no prose: {\"status\": \"ok\", \"count\": 3}";
pub const STREAMING: &str = "Count from 1 to 5.";
pub const RERANKING: &str = "Rank these documents by relevance to the query \"rust async runtime\" and answer with only the letters in order, separated by commas:\nA) cooking pasta\nB) tokio task scheduling\nC) garden soil";
pub const REASONING: &str = "If all widgets are gadgets and some gadgets are gizmos, can we conclude that all widgets are gizmos? Answer yes or no, then explain.";
pub const MCP: &str = "Do you support the Model Context Protocol (MCP) for connecting to external tool servers? Answer yes or no with a short explanation.";
pub const LSP: &str = "Produce the JSON-RPC 2.0 response body a language server would send for an LSP initialize request. Respond with only JSON.";

/// ACP support is judged over five sub-probes; at least three must pass.
pub const ACP_SUB_PROBES: &[(&str, &[&str])] = &[
    (
        "An agent session begins. Reply with the single word: initialized.",
        &["initialized"],
    ),
    (
        "List the capabilities an agent advertises during protocol negotiation.",
        &["capabilit"],
    ),
    (
        "A client cancels an in-flight task. What should the agent do? Answer briefly.",
        &["cancel", "stop", "abort"],
    ),
    (
        "Reply with a one-line status update an agent would send mid-task.",
        &["status", "progress", "working", "running", "complete"],
    ),
    (
        "End the session. Reply with the single word: terminated.",
        &["terminated"],
    ),
];

pub const REASONING_TERMS: &[&str] = &["no", "cannot", "not necessarily"];
pub const MCP_TERMS: &[&str] = &["model context protocol", "mcp", "tool server", "yes"];

/// Relative route exercised by the batch-processing probe via raw_request.
pub const BATCH_ROUTE: &str = "batches";

// ---------------------------------------------------------------------------
// Multimodal / media generation
// ---------------------------------------------------------------------------

pub const IMAGE_CAPABILITY: &str =
    "Can you analyze or generate images? Describe what you can do with visual input.";
pub const AUDIO_CAPABILITY: &str =
    "Can you process or generate audio? Describe what you can do with sound or speech.";
pub const VIDEO_CAPABILITY: &str =
    "Can you process or generate video? Describe what you can do with moving images.";
pub const MULTIMODAL_CAPABILITY: &str =
    "Which input modalities can you handle besides text? List them.";

pub const IMAGE_TERMS: &[&str] = &["image", "visual", "analyze", "describe"];
pub const AUDIO_TERMS: &[&str] = &["audio", "sound", "speech", "transcri"];
pub const VIDEO_TERMS: &[&str] = &["video", "frame", "motion", "scene"];
pub const MULTIMODAL_TERMS: &[&str] = &["multimodal", "text", "image", "multiple"];

// ---------------------------------------------------------------------------
// Generative
// ---------------------------------------------------------------------------

pub const CREATIVE_WRITING: &str = "Write a four-line poem about the sea.";
pub const STORYTELLING: &str =
    "Tell a two-sentence story about a robot who learns to paint.";
pub const CONTENT_GENERATION: &str =
    "Write a short product description for a mechanical keyboard.";
pub const ARTISTIC_CREATIVITY: &str =
    "Invent a name and a one-line concept for an imaginary art movement.";
pub const PROBLEM_SOLVING: &str = "You have a 3-liter jug and a 5-liter jug. How do you measure exactly 4 liters of water? Answer step by step.";
pub const MULTIMODAL_GENERATIVE: &str =
    "Describe the image you would generate for the prompt 'sunrise over mountains'.";

pub const CREATIVE_WRITING_TERMS: &[&str] = &["sea", "ocean", "wave", "tide", "water"];
pub const STORYTELLING_TERMS: &[&str] = &["robot", "paint"];
pub const CONTENT_GENERATION_TERMS: &[&str] = &["keyboard", "key", "switch", "typing"];
pub const ARTISTIC_CREATIVITY_TERMS: &[&str] = &["art", "ism", "movement", "color", "form"];
pub const PROBLEM_SOLVING_TERMS: &[&str] = &["fill", "pour"];
pub const MULTIMODAL_GENERATIVE_TERMS: &[&str] =
    &["sunrise", "mountain", "light", "sky", "color"];

// ---------------------------------------------------------------------------
// Complexity
// ---------------------------------------------------------------------------

pub const COMPLEXITY: &str = "Design a small Python class hierarchy for a job scheduler: a base Job class, two subclasses, thread-based execution, and error handling. Include commented code and name the design pattern you used.";

// ---------------------------------------------------------------------------
// Language battery
// ---------------------------------------------------------------------------

/// Task templates; `{lang}` is replaced per language. Three tasks per
/// language, eighteen completions total.
pub const LANGUAGE_TASKS: &[&str] = &[
    "Write a {lang} function that reverses a string.",
    "Write a {lang} function that returns the nth Fibonacci number.",
    "Write a {lang} function that checks whether a string is a palindrome.",
];

/// (language name used in prompts, response markers accepted as success).
pub const LANGUAGES: &[(&str, &[&str])] = &[
    ("Python", &["def ", "import "]),
    ("JavaScript", &["function", "console.log", "=>"]),
    ("Go", &["func "]),
    ("Java", &["class ", "public "]),
    ("C++", &["#include", "int main", "std::", "bool "]),
    ("TypeScript", &["function", ": number", ": string", "interface"]),
];
