//! Knowledge cards shown next to the rig. Static content plus the lookups
//! the page shell needs; independent of the leg animation.

use crate::error::KineticError;
use fnv::FnvHashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Basic,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Basic => "Basic",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = KineticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| KineticError::UnknownDifficulty(s.to_string()))
    }
}

/// Layout hint for the card grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeHint {
    Small,
    #[default]
    Medium,
    Large,
    Tall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag {
    pub label: &'static str,
    pub color: Option<&'static str>,
}

const fn tag(label: &'static str) -> Tag {
    Tag { label, color: None }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnowledgeItem {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub tags: &'static [Tag],
    pub size: SizeHint,
    pub difficulty: Difficulty,
}

pub const KNOWLEDGE: &[KnowledgeItem] = &[
    KnowledgeItem {
        id: "1",
        title: "动力链",
        subtitle: "Kinetic Chain",
        description: "力量从脚底蹬地开始，经由髋关节旋转、躯干传递，最终到达手腕手指的逐级放大过程。核心在于\"鞭打效应\"。",
        tags: &[tag("核心原理"), tag("发力")],
        size: SizeHint::Large,
        difficulty: Difficulty::Advanced,
    },
    KnowledgeItem {
        id: "2",
        title: "蹬地原理",
        subtitle: "Push-off Mechanics",
        description: "利用地面反作用力（GRF）。起动时非持拍脚的前脚掌瞬间爆发蹬地，为身体提供向前的初速度。",
        tags: &[tag("步法"), tag("爆发力")],
        size: SizeHint::Medium,
        difficulty: Difficulty::Basic,
    },
    KnowledgeItem {
        id: "3",
        title: "分腿垫步",
        subtitle: "Split Step",
        description: "在对手击球瞬间做出的轻微跳跃动作。利用肌肉的牵张反射（SSC）像弹簧一样蓄能，实现全方位快速启动。",
        tags: &[tag("步法"), tag("时机")],
        size: SizeHint::Medium,
        difficulty: Difficulty::Intermediate,
    },
    KnowledgeItem {
        id: "4",
        title: "内旋/外旋",
        subtitle: "Pronation / Supination",
        description: "前臂尺骨与桡骨的旋转运动。这是杀球和反手高远球最后\"闪腕\"发力的解剖学基础。",
        tags: &[tag("解剖学"), tag("技巧")],
        size: SizeHint::Tall,
        difficulty: Difficulty::Advanced,
    },
    KnowledgeItem {
        id: "5",
        title: "重心控制",
        subtitle: "Center of Gravity",
        description: "保持重心在两脚之间偏前位置。击球后迅速回中，利用髋关节的折叠降低重心来制动。",
        tags: &[tag("稳定性")],
        size: SizeHint::Medium,
        difficulty: Difficulty::Intermediate,
    },
    KnowledgeItem {
        id: "6",
        title: "手指发力",
        subtitle: "Finger Power",
        description: "依靠食指和拇指的捻动控制拍面角度，后三指的瞬间握紧提供最后的加速力。",
        tags: &[tag("微操")],
        size: SizeHint::Medium,
        difficulty: Difficulty::Advanced,
    },
];

/// Filter selection for the card grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl FromStr for DifficultyFilter {
    type Err = KineticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(DifficultyFilter::All);
        }
        s.parse().map(DifficultyFilter::Only)
    }
}

/// Items matching `filter`, in catalog order.
pub fn filter(
    items: &'static [KnowledgeItem],
    filter: DifficultyFilter,
) -> Vec<&'static KnowledgeItem> {
    items
        .iter()
        .filter(|item| match filter {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(d) => item.difficulty == d,
        })
        .collect()
}

/// Tag label → ids of the items carrying it.
pub fn tag_index(items: &'static [KnowledgeItem]) -> FnvHashMap<&'static str, Vec<&'static str>> {
    let mut index: FnvHashMap<&'static str, Vec<&'static str>> = FnvHashMap::default();
    for item in items {
        for t in item.tags {
            index.entry(t.label).or_default().push(item.id);
        }
    }
    index
}
