use super::model::AssistanceKind;

/// Builds the instruction prompt for one assistance request.
///
/// Deterministic: the same kind and payload always produce the same prompt,
/// and the payload is embedded verbatim. Validation of the payload is the
/// caller's responsibility.
pub fn build_prompt(kind: AssistanceKind, payload: &str) -> String {
    match kind {
        AssistanceKind::Explain => explain_prompt(payload),
        AssistanceKind::DetectBugs => detect_bugs_prompt(payload),
        AssistanceKind::GenerateCode => generate_code_prompt(payload),
        AssistanceKind::Optimize => optimize_prompt(payload),
    }
}

fn explain_prompt(code: &str) -> String {
    format!(
        r#"Please analyze and explain the following code in detail:

Code:
```
{}
```

Please provide:
1. What this code does
2. Key functions and their purposes
3. Important variables and data structures
4. Overall algorithm or approach
5. Any notable patterns or techniques

Provide a clear, concise explanation that would help another developer understand this code quickly."#,
        code
    )
}

fn detect_bugs_prompt(code: &str) -> String {
    format!(
        r#"Analyze the following code for potential bugs, issues, and improvements:

Code:
```
{}
```

Please identify:
1. Potential bugs or runtime errors
2. Logical errors
3. Security vulnerabilities
4. Performance issues
5. Code style and best practice violations

For each issue found, provide:
- The specific problem
- Why it's problematic
- Suggested fix

Be thorough but focus on the most critical issues first."#,
        code
    )
}

fn generate_code_prompt(description: &str) -> String {
    format!(
        r#"Based on the following description, generate clean, efficient code:

Description: {}

Please provide:
1. Well-commented code that matches the description
2. Use appropriate programming language based on context
3. Include error handling where necessary
4. Follow best practices and coding standards
5. Make the code reusable and maintainable

Return only the code with minimal explanation."#,
        description
    )
}

fn optimize_prompt(code: &str) -> String {
    format!(
        r#"Analyze the following code for optimization opportunities:

Code:
```
{}
```

Please suggest:
1. Performance optimizations
2. Memory usage improvements
3. Algorithmic improvements
4. Code simplification
5. Best practice implementations

For each suggestion, explain:
- What to change
- Why it's better
- How to implement it

Focus on practical, impactful optimizations."#,
        code
    )
}
