use super::error::ParseLanguageError;
use super::keywords::{
    CPP_KEYWORD_SET, JAVASCRIPT_KEYWORD_SET, JAVA_KEYWORD_SET, KOTLIN_KEYWORD_SET,
    PYTHON_KEYWORD_SET,
};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Languages the editor can highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Kotlin,
    Cpp,
    Java,
    JavaScript,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Python,
        Language::Kotlin,
        Language::Cpp,
        Language::Java,
        Language::JavaScript,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Kotlin => "kotlin",
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::JavaScript => "javascript",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Kotlin => "Kotlin",
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
        }
    }

    /// Names accepted by [`FromStr`] besides [`Language::name`].
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py"],
            Language::Kotlin => &["kt"],
            Language::Cpp => &["c++"],
            Language::Java => &[],
            Language::JavaScript => &["js"],
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py"],
            Language::Kotlin => &["kt", "kts"],
            Language::Cpp => &["cpp", "cc", "cxx", "hpp", "h"],
            Language::Java => &["java"],
            Language::JavaScript => &["js", "mjs", "cjs"],
        }
    }

    pub fn from_extension(ext: &str) -> Option<Language> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.extensions().contains(&ext.as_str()))
    }

    /// Lenient lookup used by the editor: anything unrecognised is Python.
    pub fn from_name_or_default(name: &str) -> Language {
        name.parse().unwrap_or(Language::Python)
    }

    pub fn keywords(&self) -> &'static HashSet<&'static str> {
        match self {
            Language::Python => &*PYTHON_KEYWORD_SET,
            Language::Kotlin => &*KOTLIN_KEYWORD_SET,
            Language::Cpp => &*CPP_KEYWORD_SET,
            Language::Java => &*JAVA_KEYWORD_SET,
            Language::JavaScript => &*JAVASCRIPT_KEYWORD_SET,
        }
    }

    /// Whether the language uses `#` line comments and triple-quoted strings
    /// instead of the C-family `//` and `/* */` comments.
    pub fn is_hash_commented(&self) -> bool {
        matches!(self, Language::Python)
    }

    /// Template seeded into the editor when a challenge is opened.
    pub fn starter_code(&self) -> &'static str {
        match self {
            Language::Python => PYTHON_STARTER,
            Language::Kotlin => KOTLIN_STARTER,
            Language::Cpp => CPP_STARTER,
            Language::Java => JAVA_STARTER,
            Language::JavaScript => JAVASCRIPT_STARTER,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.name() == needle || lang.aliases().contains(&needle.as_str()))
            .ok_or_else(|| ParseLanguageError::new(s.trim()))
    }
}

const PYTHON_STARTER: &str = "\
def solution(nums: list[int]) -> int:
    # Write your solution here
    pass

# --- Test ---
print(solution([1, 2, 3]))
";

const KOTLIN_STARTER: &str = "\
fun solution(nums: List<Int>): Int {
    // Write your solution here
    return 0
}

// --- Test ---
fun main() {
    println(solution(listOf(1, 2, 3)))
}
";

const CPP_STARTER: &str = "\
#include <iostream>
#include <vector>

int solution(std::vector<int>& nums) {
    // Write your solution here
    return 0;
}

int main() {
    std::vector<int> nums = {1, 2, 3};
    std::cout << solution(nums) << std::endl;
    return 0;
}
";

const JAVA_STARTER: &str = "\
import java.util.*;

public class Solution {
    public int solution(List<Integer> nums) {
        // Write your solution here
        return 0;
    }

    public static void main(String[] args) {
        Solution sol = new Solution();
        System.out.println(sol.solution(Arrays.asList(1, 2, 3)));
    }
}
";

const JAVASCRIPT_STARTER: &str = "\
/**
 * @param {number[]} nums
 * @return {number}
 */
function solution(nums) {
    // Write your solution here
    return 0;
}

// --- Test ---
console.log(solution([1, 2, 3]));
";
