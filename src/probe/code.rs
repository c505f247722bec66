//! Code capability probes: the thirteen code classes, the per-language
//! battery, and the complexity grader.

use super::{ask, ask_expecting, contains_any, contains_code, prompts};
use crate::client::{ChatClient, ChatCompletionRequest};
use crate::report::{ComplexityMetrics, LanguageSuccess};
use std::time::Duration;

/// The four code classes that live in the feature matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeFeatures {
    pub generation: bool,
    pub completion: bool,
    pub review: bool,
    pub explanation: bool,
}

/// Outcome of the coding assessment phase.
#[derive(Debug, Clone, Default)]
pub struct CodeAssessment {
    pub debugging: bool,
    pub optimization: bool,
    pub test_generation: bool,
    pub documentation: bool,
    pub refactoring: bool,
    pub error_resolution: bool,
    pub architecture: bool,
    pub security: bool,
    pub pattern_recognition: bool,
    pub language_success: LanguageSuccess,
    pub overall_success_rate: f64,
    pub complexity: ComplexityMetrics,
}

async fn ask_for_code(
    client: &ChatClient,
    model: &str,
    prompt: &str,
    deadline: Option<Duration>,
) -> bool {
    let request = ChatCompletionRequest::user(model, prompt);
    match ask(client, &request, deadline).await {
        Some(text) => contains_code(&text),
        None => false,
    }
}

/// Generation, completion, review, explanation. Generation and completion
/// must answer with code; review and explanation with the expected terms.
pub async fn code_feature_probes(
    client: &ChatClient,
    model: &str,
    deadline: Option<Duration>,
) -> CodeFeatures {
    CodeFeatures {
        generation: ask_for_code(client, model, prompts::CODE_GENERATION, deadline).await,
        completion: ask_for_code(client, model, prompts::CODE_COMPLETION, deadline).await,
        review: ask_expecting(client, model, prompts::CODE_REVIEW, prompts::REVIEW_TERMS, deadline)
            .await,
        explanation: ask_expecting(
            client,
            model,
            prompts::CODE_EXPLANATION,
            prompts::EXPLANATION_TERMS,
            deadline,
        )
        .await,
    }
}

/// Test generation and refactoring must answer with code AND the expected
/// terms; the remaining classes are keyword-only.
async fn code_with_terms(
    client: &ChatClient,
    model: &str,
    prompt: &str,
    keywords: &[&str],
    deadline: Option<Duration>,
) -> bool {
    let request = ChatCompletionRequest::user(model, prompt);
    match ask(client, &request, deadline).await {
        Some(text) => contains_code(&text) && contains_any(&text, keywords),
        None => false,
    }
}

/// Run the nine remaining code classes, the language battery, and the
/// complexity assessment.
pub async fn assess_code(
    client: &ChatClient,
    model: &str,
    deadline: Option<Duration>,
) -> CodeAssessment {
    let mut assessment = CodeAssessment {
        debugging: ask_expecting(
            client,
            model,
            prompts::DEBUGGING,
            prompts::DEBUGGING_TERMS,
            deadline,
        )
        .await,
        optimization: ask_expecting(
            client,
            model,
            prompts::OPTIMIZATION,
            prompts::OPTIMIZATION_TERMS,
            deadline,
        )
        .await,
        test_generation: code_with_terms(
            client,
            model,
            prompts::TEST_GENERATION,
            prompts::TEST_TERMS,
            deadline,
        )
        .await,
        documentation: ask_expecting(
            client,
            model,
            prompts::DOCUMENTATION,
            prompts::DOCUMENTATION_TERMS,
            deadline,
        )
        .await,
        refactoring: {
            let request = ChatCompletionRequest::user(model, prompts::REFACTORING);
            match ask(client, &request, deadline).await {
                Some(text) => contains_code(&text),
                None => false,
            }
        },
        error_resolution: ask_expecting(
            client,
            model,
            prompts::ERROR_RESOLUTION,
            prompts::ERROR_RESOLUTION_TERMS,
            deadline,
        )
        .await,
        architecture: ask_expecting(
            client,
            model,
            prompts::ARCHITECTURE,
            prompts::ARCHITECTURE_TERMS,
            deadline,
        )
        .await,
        security: ask_expecting(
            client,
            model,
            prompts::SECURITY,
            prompts::SECURITY_TERMS,
            deadline,
        )
        .await,
        pattern_recognition: ask_expecting(
            client,
            model,
            prompts::PATTERN_RECOGNITION,
            prompts::PATTERN_TERMS,
            deadline,
        )
        .await,
        ..CodeAssessment::default()
    };

    let (languages, overall) = assess_languages(client, model, deadline).await;
    assessment.language_success = languages;
    assessment.overall_success_rate = overall;
    assessment.complexity = assess_complexity(client, model, deadline).await;

    assessment
}

/// Three tasks per language; per-language rate = successes/3·100, overall
/// = total/18·100.
async fn assess_languages(
    client: &ChatClient,
    model: &str,
    deadline: Option<Duration>,
) -> (LanguageSuccess, f64) {
    let mut rates = [0.0f64; 6];
    let mut total_passed = 0u32;
    let task_count = prompts::LANGUAGE_TASKS.len() as u32;

    for (i, (language, markers)) in prompts::LANGUAGES.iter().enumerate() {
        let mut passed = 0u32;
        for task in prompts::LANGUAGE_TASKS {
            let prompt = task.replace("{lang}", language);
            let request = ChatCompletionRequest::user(model, &prompt);
            if let Some(text) = ask(client, &request, deadline).await {
                if contains_any(&text, markers) {
                    passed += 1;
                }
            }
        }
        rates[i] = f64::from(passed) / f64::from(task_count) * 100.0;
        total_passed += passed;
    }

    let overall = f64::from(total_passed)
        / f64::from(task_count * prompts::LANGUAGES.len() as u32)
        * 100.0;
    let languages = LanguageSuccess {
        python: rates[0],
        javascript: rates[1],
        go: rates[2],
        java: rates[3],
        cpp: rates[4],
        typescript: rates[5],
    };
    (languages, overall)
}

/// One structured task; the response is graded by text heuristics.
async fn assess_complexity(
    client: &ChatClient,
    model: &str,
    deadline: Option<Duration>,
) -> ComplexityMetrics {
    let request = ChatCompletionRequest::user(model, prompts::COMPLEXITY);
    match ask(client, &request, deadline).await {
        Some(text) => grade_complexity(&text),
        None => ComplexityMetrics::default(),
    }
}

/// Grade a complexity-probe response. Pure; each dimension accumulates
/// fixed increments and caps at 100, depth gates sequentially from 1 to 5.
pub fn grade_complexity(text: &str) -> ComplexityMetrics {
    let t = text.to_lowercase();

    let mut code_quality: f64 = 0.0;
    if t.contains('#') || t.contains("//") {
        code_quality += 10.0;
    }
    if t.contains("def ") || t.contains("function") || t.contains("class ") {
        code_quality += 10.0;
    }
    if t.contains("try") && (t.contains("except") || t.contains("catch")) {
        code_quality += 15.0;
    }
    if t.contains("if __name__") || t.contains("fn main") || t.contains("public static void main")
    {
        code_quality += 5.0;
    }

    let mut logic_correctness: f64 = 0.0;
    if t.contains("if ") || t.contains("for ") || t.contains("while ") {
        logic_correctness += 15.0;
    }
    if t.contains("return") {
        logic_correctness += 10.0;
    }
    if t.contains("&&") || t.contains("||") || t.contains(" and ") || t.contains(" or ") {
        logic_correctness += 10.0;
    }
    // A bare `=` after stripping every comparison-shaped operator.
    let without_comparisons = t
        .replace("==", "")
        .replace(">=", "")
        .replace("<=", "")
        .replace("!=", "")
        .replace("=>", "");
    if without_comparisons.contains('=') {
        logic_correctness += 5.0;
    }

    let mut runtime_efficiency: f64 = 0.0;
    if t.contains("map(") || t.contains(".map") || t.contains("filter(") || t.contains(".filter")
    {
        runtime_efficiency += 15.0;
    }
    if t.contains("dict") || t.contains("hash") || t.contains("set(") {
        runtime_efficiency += 10.0;
    }
    if t.contains("o(") {
        runtime_efficiency += 20.0;
    }
    if t.contains("len(") || t.contains(".length") {
        runtime_efficiency += 5.0;
    }

    let mut max_depth = 1u8;
    if t.contains("class ") {
        max_depth = 2;
        if t.contains("extends") || t.contains("inherit") || t.contains("(object)") || t.contains("(job)")
        {
            max_depth = 3;
            if t.contains("thread") || t.contains("async") || t.contains("concurrent") {
                max_depth = 4;
                if t.contains("design pattern") {
                    max_depth = 5;
                }
            }
        }
    }

    ComplexityMetrics {
        max_depth,
        code_quality: code_quality.min(100.0),
        logic_correctness: logic_correctness.min(100.0),
        runtime_efficiency: runtime_efficiency.min(100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_empty_text_is_floor() {
        let metrics = grade_complexity("");
        assert_eq!(metrics.max_depth, 1);
        assert_eq!(metrics.code_quality, 0.0);
        assert_eq!(metrics.logic_correctness, 0.0);
        assert_eq!(metrics.runtime_efficiency, 0.0);
    }

    #[test]
    fn grade_commented_class_with_error_handling() {
        let text = "# scheduler\nclass Job:\n    def run(self):\n        try:\n            pass\n        except Exception:\n            pass\nif __name__ == '__main__':\n    pass";
        let metrics = grade_complexity(text);
        // comments + class keyword + try/except + main idiom
        assert_eq!(metrics.code_quality, 40.0);
        assert_eq!(metrics.max_depth, 2);
    }

    #[test]
    fn depth_gates_sequentially() {
        assert_eq!(grade_complexity("no code here").max_depth, 1);
        assert_eq!(grade_complexity("class A: pass").max_depth, 2);
        assert_eq!(grade_complexity("class A(object): pass").max_depth, 3);
        assert_eq!(
            grade_complexity("class A(object): pass  # uses thread pool").max_depth,
            4
        );
        assert_eq!(
            grade_complexity("class A(object): pass  # thread, a design pattern called worker")
                .max_depth,
            5
        );
        // Concurrency without inheritance does not raise the depth past 2.
        assert_eq!(grade_complexity("class A: pass # threaded").max_depth, 2);
    }

    #[test]
    fn logic_score_counts_control_flow_and_assignment() {
        let text = "if x and y:\n    total = 1\n    return total";
        let metrics = grade_complexity(text);
        // control flow + return + logical operator + assignment
        assert_eq!(metrics.logic_correctness, 40.0);
    }

    #[test]
    fn assignment_increment_ignores_pure_comparison() {
        // "if " -> 15, no bare assignment behind any comparison operator
        assert_eq!(grade_complexity("if a == b: pass").logic_correctness, 15.0);
        assert_eq!(grade_complexity("if n >= 0: pass").logic_correctness, 15.0);
        assert_eq!(grade_complexity("if n <= 0: pass").logic_correctness, 15.0);
        assert_eq!(grade_complexity("if x != y: pass").logic_correctness, 15.0);
        assert_eq!(
            grade_complexity("for each, x => x + 1 is applied").logic_correctness,
            15.0
        );
    }

    #[test]
    fn assignment_increment_survives_nearby_comparisons() {
        // "if " + "return" + bare assignment; ">=" alone must not mask it
        let metrics = grade_complexity("if n >= 0:\n    total = n\n    return total");
        assert_eq!(metrics.logic_correctness, 30.0);
    }

    #[test]
    fn efficiency_rewards_big_o_annotation() {
        let metrics = grade_complexity("uses a dict lookup, O(1) per access, len(xs) items");
        assert_eq!(metrics.runtime_efficiency, 35.0);
    }

    #[test]
    fn dimensions_cap_at_100() {
        let text = "# // def function class try except catch if for while return && || and or x = 1 \
                    map( .map filter( .filter dict hash set( o(n) len( .length"
            .repeat(5);
        let metrics = grade_complexity(&text);
        assert!(metrics.code_quality <= 100.0);
        assert!(metrics.logic_correctness <= 100.0);
        assert!(metrics.runtime_efficiency <= 100.0);
    }
}
