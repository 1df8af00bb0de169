// All LLM prompt constants for the guidance module.
// Templates use `{placeholder}` markers filled by `advisor.rs`.

/// System prompt for calls that must return a JSON object.
pub const JSON_SYSTEM: &str = "당신은 대한민국 웹 에이전시의 보상(Compensation) 분석가입니다. \
    반드시 유효한 JSON 객체 하나만 응답하세요. \
    JSON 밖의 텍스트, 마크다운 코드 펜스, 부연 설명을 포함하지 마세요. \
    모든 금액은 만원 단위의 정수입니다.";

/// System prompt for free-form analysis text.
pub const TEXT_SYSTEM: &str = "당신은 대한민국 웹 에이전시의 HR 매니저입니다. \
    결과는 한국어 분석 본문만 반환하세요. 인사말, 제목, 마크다운 코드 펜스는 넣지 마세요. \
    모든 금액은 만원 단위입니다.";

/// Baseline market value. Placeholders: `{role}`, `{level}`, `{experience_line}`,
/// `{education_line}`, `{location}`, `{agency_size}`, `{company_standard_block}`.
pub const MARKET_VALUE_PROMPT_TEMPLATE: &str = r#"보수적인 연봉 정책을 가진 중소 규모 전통 웹 에이전시(SI, 공공기관 구축, 유지보수 중심)의 HR 매니저로서, 아래 지원자의 객관적인 기초 시장 가치를 평가하세요.

[데이터 기준]
- 사람인, 잡코리아 등 범용 채용 플랫폼의 중소기업 데이터를 우선합니다.
- IT 대기업/플랫폼 기업, 대규모 투자를 받은 스타트업, 금융권 IT 및 대기업 SI 계열사 데이터는 제외하거나 가중치를 크게 낮춥니다.
- 역량 평가 결과와 희망 연봉은 이 단계에서 고려하지 않습니다.

[지원자 프로필]
- 직무: {role}
- SW기술자 등급: {level}
{experience_line}
{education_line}
- 근무지: {location}
- 회사 규모: {agency_size}
{company_standard_block}

아래 스키마의 JSON 객체를 반환하세요:
{
  "min_salary": 정수,
  "avg_salary": 정수,
  "max_salary": 정수,
  "reasoning": {
    "summary": "채용 관점의 한 줄 요약",
    "market_analysis": "프로필 조건이 시장 가치에 미치는 영향 (개인 역량 평가 제외)",
    "comparison": "예측 연봉과 회사 내부 기준의 비교 및 전략적 제안",
    "data_source": "데이터 출처와 고연봉 시장을 제외한 필터링 방법론"
  }
}"#;

pub const STANDARD_DESCRIPTION_BLOCK: &str = "[회사 내부 연봉 기준 (선택 등급)]\n- {description}";

pub const STANDARD_BAND_BLOCK: &str = "[회사 내부 연봉 기준 (동일 직무/연차)]\n- 하위: {low}\n- 중위: {middle}\n- 상위: {high}";

/// Competency premium. Placeholders: `{baseline_avg}`, `{role}`,
/// `{evaluation_lines}`, `{grade}`.
pub const COMPETENCY_PROMPT_TEMPLATE: &str = r#"보상 전문가로서 지원자의 개별 역량을 연봉에 반영하세요.

[상황]
- 기초 시장 평균 연봉: {baseline_avg}만원
- 역량 평가 평균 점수에 따른 종합 등급: '{grade}'

[{role} 역량 상세 평가]
{evaluation_lines}

[요청]
1. 평가 점수를 근거로 기초 평균 연봉에 더하거나 뺄 역량 프리미엄을 정수(만원)로 산정하세요. 음수도 가능합니다.
2. 각 역량 항목이 프리미엄에 어떻게 기여했는지 설명하는 역량 분석 리포트를 작성하세요.
3. 종합 등급 '{grade}'을 그대로 반환하세요.

아래 스키마의 JSON 객체를 반환하세요:
{
  "competency_premium": 정수,
  "competency_analysis_text": "역량 분석 리포트",
  "competency_grade": "{grade}"
}"#;

/// Previous-salary review. Placeholders: `{baseline_avg}`, `{previous}`,
/// `{desired}`, `{grade_line}`, `{grade}`.
pub const PREVIOUS_SALARY_PROMPT_TEMPLATE: &str = r#"[상황]
- 기초 시장 평균 연봉: 약 {baseline_avg}만원
- 이전 직장 연봉: {previous}만원
- 희망 연봉: {desired}만원
{grade_line}

[요청]
내부 검토용 리포트를 1~2 문단으로 작성하세요.
1. 이전 대우 수준: 이전 연봉을 시장 가치와 비교하되, 저평가된 인재일 가능성과 이전 연봉이 실제 성과 수준을 반영했을 가능성을 모두 검토하세요. 후자는 당사 역량 평가 결과('{grade}')와 연결해 추론하세요.
2. 희망 인상률: 이전 연봉 대비 희망 연봉의 인상률(%)을 계산하고 합리성을 평가하세요."#;

/// Desired-salary guide when part of the market value was held back.
/// Placeholders: `{market_value}`, `{recommended_avg}`, `{gap}`, `{desired}`.
pub const DESIRED_SALARY_GAP_PROMPT_TEMPLATE: &str = r#"보수적이고 전략적인 HR 매니저로서 작성하세요.

[상황]
- 역량을 반영한 시장 가치: 평균 {market_value}만원
- 회사 정책과 희망 연봉을 고려한 최종 추천 연봉: {recommended_avg}만원
- 잠재 가치 갭(Potential Value Gap): 약 {gap}만원

[요청]
희망 연봉({desired}만원)의 합리성을 확인하고, 우수 인재를 비용 효율적으로 채용하기 위한 내부 협상 전략 가이드를 1~2 문단으로 작성하세요.
1. 최종 추천 연봉({recommended_avg}만원) 제안을 권고하세요.
2. 잠재 가치 갭은 현재 연봉 인상의 근거가 아니라, 입사 후 성과에 따른 보상(인센티브, 조기 재협상 등)이 가능하다는 설득 근거로 활용하도록 조언하세요."#;

/// Standard desired-salary guide. Placeholders: `{recommended_avg}`, `{desired}`.
pub const DESIRED_SALARY_PROMPT_TEMPLATE: &str = r#"[상황]
- 최종 시장 가치 평균 연봉: 약 {recommended_avg}만원
- 희망 연봉: {desired}만원

[요청]
희망 연봉의 적정성을 검토하고 채용 담당자를 위한 구체적인 협상 전략 가이드를 1~2 문단으로 작성하세요."#;

/// Executive summary when a value gap exists. Placeholders: `{market_value}`,
/// `{recommended_avg}`, `{gap}`, `{desired}`, `{grade_line}`.
pub const SUMMARY_GAP_PROMPT_TEMPLATE: &str = r#"최고 HR 책임자(CHRO)로서 경영진 보고용 최종 요약을 1~2 문장으로 작성하세요.

[데이터]
- 역량을 반영한 시장 가치(평균): {market_value}만원
- 최종 추천 연봉(보수적 정책 적용): {recommended_avg}만원
- 잠재 가치 갭: {gap}만원
- 희망 연봉: {desired}
{grade_line}

[작성 기준]
1. 역량 종합 평가 등급을 근거로 객관적으로 작성하세요.
2. '핵심 인재' 등급일 때만 '핵심 인재'라는 표현을 쓰세요. '우수 역량 보유' 등급은 '성장 잠재력이 높은 우수 인재' 정도로 표현하세요.
3. 최종 추천 연봉이 비용 효율적인 제안임을 강조하세요."#;

/// Standard executive summary. Placeholders: `{baseline_avg}`, `{premium}`,
/// `{recommended_avg}`, `{company_middle}`, `{desired}`, `{score_line}`, `{grade_line}`.
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"최고 HR 책임자(CHRO)로서 경영진 보고용 최종 요약을 1~2 문장으로 작성하세요.

[데이터]
- 기초 시장 가치(평균): {baseline_avg}만원
- 역량 프리미엄: {premium}만원
- 최종 추천 연봉(평균): {recommended_avg}만원
- 회사 내부 기준 연봉(중위): {company_middle}
- 희망 연봉: {desired}
{score_line}
{grade_line}

[작성 기준]
1. 역량 종합 평가 등급을 근거로 작성하세요.
2. '추가 검토 필요' 등급이면 '우수 인재', '뛰어난 역량' 같은 긍정 표현을 쓰지 말고 보완이 필요한 점을 객관적으로 기술하세요.
3. '기본 역량 보유' 등급이면 '준수한', '안정적인' 수준의 표현을 쓰세요.
4. 추천 연봉, 희망 연봉, 회사 기준을 비교해 채용 결정에 필요한 핵심 인사이트를 제시하세요."#;

/// Hiring proposal. Placeholders: `{competency_analysis}`, `{applicant}`,
/// `{role}`, `{education}`, `{experience}`, `{level}`, `{avg_salary}`.
pub const HIRING_PROPOSAL_PROMPT_TEMPLATE: &str = r#"경영진에게 제출할 공식 채용 품의서의 면접 평가 섹션을 작성하는 HR 총괄 책임자로서 작성하세요.

[작성 기준]
- 과장된 표현 없이 관찰된 사실에 근거해 객관적으로 서술합니다.
- 각 항목은 핵심만 1~2 문장으로 씁니다. 강점은 글머리 기호(-)를 쓰되 항목당 한 문장입니다.
- '프리미엄', '점수' 같은 내부 분석 용어는 쓰지 않습니다.
- 보완점은 회사가 지원할 수 있는 성장 계획과 함께 제시해 관리 가능한 리스크로 보이게 합니다.

[역량 평가 분석]
{competency_analysis}

[지원자 정보]
- 지원자: {applicant}
- 직무: {role}
- 학력: {education}
- 경력: {experience}년 ({level})
- 제안 연봉: {avg_salary}만원

아래 스키마의 JSON 객체를 반환하세요:
{
  "summary": "면접 총평",
  "strengths": "주요 강점 (- 글머리 기호)",
  "improvements": "보완점 및 성장 계획",
  "rationale": "제안 연봉의 합리성을 근거로 한 채용 추천 사유"
}"#;
