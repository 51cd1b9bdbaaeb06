//! The fixed content outline of the combat UI data reference document.
//!
//! Everything in this module is literal authored content: the cover page, the
//! importance-tier legend, thirteen numbered sections of five-column field
//! tables, the 14~17 summary, the data statistics, and the document info
//! table. There is no conditional content and no external data source; the
//! outline mirrors the document's table of contents top to bottom.

use crate::model::{Block, CellPatch, Column, Outline, Section, TableSpec, TextClass};
use crate::theme::{Palette, WHITE};

/// Version string shown on the cover and in the info table.
pub const DOCUMENT_VERSION: &str = "v2.0";

/// Authoring date, embedded as literal text so output stays deterministic.
pub const DOCUMENT_DATE: &str = "2026-02-04";

const FIELD_HEADER: [&str; 5] = ["데이터 명", "표시 값", "데이터 타입", "중요도", "참조"];

fn field_columns() -> Vec<Column> {
    vec![
        Column::left(35.0),
        Column::left(50.0),
        Column::left(30.0),
        Column::centered(20.0),
        Column::left(25.0),
    ]
}

fn field_table(palette: &Palette, rows: &[[&str; 5]]) -> Block {
    Block::table(
        TableSpec::new(palette, field_columns(), FIELD_HEADER)
            .with_rows(rows.iter().map(|row| row.iter().copied())),
    )
}

/// Importance legend on the cover page; each tier row is highlighted with its
/// tier color, resolved through the classifier.
fn legend_table(palette: &Palette) -> Block {
    let rows = [
        ["필수", "게임 플레이에 반드시 필요한 핵심 데이터"],
        ["권장", "플레이어 편의성/전략적 판단에 중요한 데이터"],
        ["선택", "향후 확장 또는 특정 상황에서 필요한 데이터"],
    ];

    let mut spec = TableSpec::new(
        palette,
        vec![Column::centered(30.0), Column::centered(100.0)],
        ["중요도", "설명"],
    )
    .with_font_size(10)
    .with_header_font_size(10)
    .with_header_bold(false)
    .with_cell_padding_mm(2.8)
    .without_stripes()
    .without_frame()
    .with_rows(rows.iter().map(|row| row.iter().copied()));

    for (index, row) in rows.iter().enumerate() {
        if let Some(color) = palette.tier_color(row[0]) {
            spec = spec.with_patch(
                CellPatch::new(index + 1, 0)
                    .with_background(color)
                    .with_text_color(WHITE),
            );
        }
    }

    Block::table(spec)
}

fn summary_table(palette: &Palette) -> Block {
    Block::table(
        TableSpec::new(
            palette,
            vec![Column::left(50.0), Column::left(110.0)],
            ["섹션", "주요 데이터"],
        )
        .with_font_size(10)
        .with_header_font_size(10)
        .with_header_bold(false)
        .with_centered_header(false)
        .with_cell_padding_mm(2.8)
        .with_horizontal_padding_mm(2.8)
        .without_frame()
        .with_rows([
            [
                "14. 시스템/메뉴 UI",
                "일시정지 상태, 메뉴 옵션, 게임 속도, 포기 확인",
            ],
            [
                "15. 툴팁/상세 정보",
                "유닛/카드/효과/인텐트 상세 정보 팝업",
            ],
            [
                "16. 드로우/카드 이동",
                "드로우 이벤트, 버리기 이벤트, 리셔플 이벤트",
            ],
            ["17. 추가 고려 데이터", "튜토리얼, 전투 통계, 콤보 시스템"],
        ]),
    )
}

/// Statistics table; the three tier rows reuse the legend highlight colors and
/// the total row falls through the classifier unmatched, so it keeps the plain
/// cream emphasis instead of a tier color.
fn stats_table(palette: &Palette) -> Block {
    let rows = [
        ["필수", "약 120개", "60%"],
        ["권장", "약 60개", "30%"],
        ["선택", "약 20개", "10%"],
        ["총계", "약 200개", "100%"],
    ];

    let mut spec = TableSpec::new(
        palette,
        vec![
            Column::centered(40.0),
            Column::centered(40.0),
            Column::centered(40.0),
        ],
        ["중요도", "개수", "비율"],
    )
    .with_font_size(11)
    .with_header_font_size(11)
    .with_header_bold(false)
    .with_cell_padding_mm(3.5)
    .with_header_padding_mm(3.5)
    .without_stripes()
    .without_frame()
    .with_rows(rows.iter().map(|row| row.iter().copied()));

    for (index, row) in rows.iter().enumerate() {
        if let Some(color) = palette.tier_color(row[0]) {
            spec = spec.with_patch(
                CellPatch::new(index + 1, 0)
                    .with_background(color)
                    .with_text_color(WHITE),
            );
        }
    }
    for column in 0..3 {
        spec = spec.with_patch(
            CellPatch::new(rows.len(), column)
                .with_background(palette.stripe_background)
                .bold(),
        );
    }

    Block::table(spec)
}

fn info_table(palette: &Palette) -> Block {
    let rows = [
        ["버전", DOCUMENT_VERSION],
        ["작성일", DOCUMENT_DATE],
        [
            "목적",
            "UI 디자이너가 전투 시스템에서 표시해야 할 데이터 요소 파악",
        ],
        ["범위", "전투 시스템 UI 데이터 요소 정의 (디자인/UX 제외)"],
    ];

    let mut spec = TableSpec::new(
        palette,
        vec![Column::left(40.0), Column::left(120.0)],
        ["항목", "내용"],
    )
    .with_font_size(10)
    .with_header_font_size(10)
    .with_header_bold(false)
    .with_centered_header(false)
    .with_cell_padding_mm(2.8)
    .with_horizontal_padding_mm(2.8)
    .without_stripes()
    .without_frame()
    .with_rows(rows.iter().map(|row| row.iter().copied()));

    for index in 1..=rows.len() {
        spec = spec.with_patch(CellPatch::new(index, 0).with_background(palette.stripe_background));
    }

    Block::table(spec)
}

fn cover_blocks(palette: &Palette) -> Vec<Block> {
    vec![
        Block::spacer(30.0),
        Block::text(TextClass::Title, "전투 UI 데이터 기획서"),
        Block::spacer(10.0),
        Block::text(TextClass::Subtitle, "버전 2.0"),
        Block::text(TextClass::Subtitle, format!("작성일: {}", DOCUMENT_DATE)),
        Block::spacer(20.0),
        Block::text(TextClass::Subtitle, "UI 디자이너가 전투 시스템에서"),
        Block::text(
            TextClass::Subtitle,
            "표시해야 할 데이터 요소를 파악하기 위한 문서",
        ),
        Block::spacer(10.0),
        Block::text(TextClass::Subtitle, "(디자인/UX 제외 - 순수 데이터 정의)"),
        Block::spacer(30.0),
        legend_table(palette),
    ]
}

fn section_global(palette: &Palette) -> Section {
    Section::builder("1. 글로벌 전투 정보")
        .start_on_new_page(true)
        .push_block(Block::subsection("1.1 턴 정보"))
        .push_block(field_table(
            palette,
            &[
                [
                    "현재 턴 번호",
                    "전투 시작 후 경과 턴 수 (1, 2, 3...)",
                    "Integer",
                    "필수",
                    "턴_시스템 1.1",
                ],
                [
                    "글로벌 타이머 잔여 시간",
                    "다음 턴까지 남은 시간 (0~3초)",
                    "Float",
                    "필수",
                    "턴_시스템 2.1",
                ],
                [
                    "글로벌 타이머 상태",
                    "진행 중 / 일시정지",
                    "Enum",
                    "필수",
                    "턴_시스템 2.3",
                ],
                [
                    "일시정지 사유",
                    "카드 사용 중 / 메뉴 / 컷신",
                    "Enum",
                    "권장",
                    "턴_시스템 2.3",
                ],
                [
                    "게임 속도 배율",
                    "1x / 1.5x / 2x",
                    "Enum",
                    "권장",
                    "턴_시스템 2.4",
                ],
            ],
        ))
        .push_block(Block::subsection("1.2 전투 상태"))
        .push_block(field_table(
            palette,
            &[
                [
                    "전투 상태",
                    "진행 중 / 승리 / 패배",
                    "Enum",
                    "필수",
                    "코어루프",
                ],
                ["남은 아군 수", "생존 아군 유닛 수", "Integer", "필수", "코어루프"],
                ["남은 적 수", "생존 적 유닛 수", "Integer", "필수", "코어루프"],
            ],
        ))
        .build()
}

fn section_grid(palette: &Palette) -> Section {
    Section::builder("2. 그리드/공간 정보")
        .push_block(Block::subsection("2.1 그리드 기본"))
        .push_block(field_table(
            palette,
            &[
                [
                    "그리드 크기",
                    "행 x 열 (3x3, 4x4, 5x5)",
                    "Integer Pair",
                    "필수",
                    "반그리드 2.1",
                ],
                [
                    "아군 진영 셀 목록",
                    "아군 배치 가능 셀 좌표",
                    "Array<CellCoord>",
                    "필수",
                    "반그리드 2.2",
                ],
                [
                    "적 진영 셀 목록",
                    "적 배치 셀 좌표",
                    "Array<CellCoord>",
                    "필수",
                    "반그리드 2.2",
                ],
            ],
        ))
        .push_block(Block::subsection("2.2 셀 정보"))
        .push_block(field_table(
            palette,
            &[
                [
                    "셀별 유닛 정보",
                    "각 셀에 위치한 유닛 ID",
                    "Map<CellCoord, UnitID>",
                    "필수",
                    "반그리드",
                ],
                [
                    "셀 상태",
                    "빈 셀 / 점유 / 이동 불가 / 특수 효과",
                    "Enum",
                    "필수",
                    "반그리드 3.2",
                ],
            ],
        ))
        .push_block(Block::subsection("2.3 타겟팅/범위"))
        .push_block(field_table(
            palette,
            &[
                [
                    "현재 타겟 유닛",
                    "선택된 타겟 유닛 ID",
                    "UnitID",
                    "필수",
                    "반그리드",
                ],
                [
                    "유효 타겟 목록",
                    "현재 선택한 카드로 타겟 가능한 유닛",
                    "Array<UnitID>",
                    "필수",
                    "반그리드 4.2",
                ],
                [
                    "효과 범위 셀 목록",
                    "효과가 적용될 셀 좌표",
                    "Array<CellCoord>",
                    "필수",
                    "반그리드 4.3",
                ],
                [
                    "이동 가능 셀 목록",
                    "유닛이 이동 가능한 셀 좌표",
                    "Array<CellCoord>",
                    "권장",
                    "반그리드 3.1",
                ],
                [
                    "같은 행 유닛 목록",
                    "같은 행에 위치한 유닛",
                    "Array<UnitID>",
                    "권장",
                    "반그리드",
                ],
                [
                    "위험 범위 셀 목록",
                    "적이 다음 턴에 공격할 예상 셀",
                    "Array<CellCoord>",
                    "권장",
                    "인텐트 7.4",
                ],
            ],
        ))
        .build()
}

fn section_ally_units(palette: &Palette) -> Section {
    Section::builder("3. 아군 유닛 정보")
        .start_on_new_page(true)
        .push_block(Block::subsection("3.1 기본 스탯"))
        .push_block(field_table(
            palette,
            &[
                ["유닛 ID", "고유 식별자", "FName", "필수", "코어루프"],
                ["유닛 이름", "표시 이름", "String", "필수", "코어루프"],
                ["현재 HP", "현재 체력", "Integer", "필수", "코어루프"],
                ["최대 HP", "최대 체력", "Integer", "필수", "코어루프"],
                ["보호막", "현재 보호막 수치", "Integer", "필수", "코어루프"],
                ["방어력", "현재 방어력", "Integer", "권장", "코어루프"],
                [
                    "스피드",
                    "동시 발동 시 처리 순서 (1~100)",
                    "Integer",
                    "필수",
                    "턴_시스템 4.1",
                ],
                ["기본 데미지", "기본 공격력 수치", "Integer", "권장", "코어루프"],
                ["그리드 위치", "행, 열 좌표", "CellCoord", "필수", "반그리드"],
                [
                    "생존 상태",
                    "생존 / 사망 / 부활 대기",
                    "Enum",
                    "필수",
                    "코어루프",
                ],
            ],
        ))
        .push_block(Block::subsection("3.2 AP (행동력)"))
        .push_block(field_table(
            palette,
            &[
                ["현재 AP", "현재 보유 AP", "Integer", "필수", "카드_시스템 5.1"],
                ["최대 AP", "최대 AP 용량", "Integer", "필수", "카드_시스템 5.1"],
                [
                    "턴당 AP 회복량",
                    "매 턴 회복되는 AP",
                    "Integer",
                    "선택",
                    "카드_시스템 5.1",
                ],
            ],
        ))
        .push_block(Block::subsection("3.3 턴 관련"))
        .push_block(field_table(
            palette,
            &[
                [
                    "턴 주기",
                    "인텐트 행동 간격 (1~7턴)",
                    "Integer",
                    "필수",
                    "턴_시스템 3.3",
                ],
                [
                    "현재 턴 카운터",
                    "행동까지 남은 턴 수 (0이면 발동)",
                    "Integer",
                    "필수",
                    "턴_시스템 3.1",
                ],
                [
                    "카운터 상태",
                    "일반 / 경고(1) / 발동 중(0)",
                    "Enum",
                    "필수",
                    "턴_시스템 3.2",
                ],
            ],
        ))
        .push_block(Block::subsection("3.4 상태 효과 (버프/디버프)"))
        .push_block(field_table(
            palette,
            &[
                [
                    "버프 목록",
                    "적용 중인 버프 리스트",
                    "Array<BuffData>",
                    "필수",
                    "턴_시스템 6.3",
                ],
                [
                    "디버프 목록",
                    "적용 중인 디버프 리스트",
                    "Array<DebuffData>",
                    "필수",
                    "턴_시스템 6.3",
                ],
                ["효과별 ID", "효과 고유 식별자", "FName", "필수", "턴_시스템"],
                ["효과별 이름", "효과 표시 이름", "String", "필수", "턴_시스템"],
                [
                    "효과별 아이콘",
                    "효과 아이콘 리소스",
                    "Texture2D",
                    "필수",
                    "턴_시스템",
                ],
                [
                    "효과별 잔여 턴",
                    "남은 지속 턴 수",
                    "Integer",
                    "필수",
                    "턴_시스템 6.3",
                ],
                [
                    "효과별 스택 수",
                    "중첩 가능 효과의 스택 수",
                    "Integer",
                    "필수",
                    "턴_시스템",
                ],
                [
                    "효과별 설명",
                    "효과 설명 텍스트",
                    "String",
                    "권장",
                    "턴_시스템",
                ],
            ],
        ))
        .push_block(Block::subsection("3.5 무력화 상태"))
        .push_block(field_table(
            palette,
            &[
                [
                    "무력화 상태",
                    "정상 / 스턴 / 빙결 / 침묵 / 속박",
                    "Enum",
                    "필수",
                    "턴_시스템 5.3",
                ],
                [
                    "무력화 잔여 턴",
                    "무력화 효과 남은 턴 수",
                    "Integer",
                    "필수",
                    "턴_시스템 5.3",
                ],
            ],
        ))
        .build()
}

fn section_ally_intents(palette: &Palette) -> Section {
    Section::builder("4. 아군 인텐트 정보")
        .start_on_new_page(true)
        .push_block(Block::subsection("4.1 현재 인텐트"))
        .push_block(field_table(
            palette,
            &[
                [
                    "현재 활성 인텐트 ID",
                    "현재 실행 중인 인텐트",
                    "FName",
                    "필수",
                    "인텐트 4.1",
                ],
                [
                    "현재 인텐트 아이콘",
                    "인텐트 아이콘 리소스",
                    "Texture2D",
                    "필수",
                    "인텐트 7.2",
                ],
                [
                    "현재 인텐트 이름",
                    "인텐트 표시 이름",
                    "String",
                    "필수",
                    "인텐트",
                ],
                [
                    "현재 인텐트 설명",
                    "인텐트 효과 설명",
                    "String",
                    "권장",
                    "인텐트",
                ],
                [
                    "실행 조건 충족 여부",
                    "조건 충족 / 불충족",
                    "Boolean",
                    "필수",
                    "인텐트 3.2",
                ],
                [
                    "예상 실행 행동",
                    "실행 행동 설명",
                    "String",
                    "권장",
                    "인텐트 3.1",
                ],
                [
                    "예상 대기 행동",
                    "대기 행동 설명 (조건 불충족 시)",
                    "String",
                    "권장",
                    "인텐트 3.1",
                ],
            ],
        ))
        .push_block(Block::subsection("4.2 인텐트 전환 메뉴"))
        .push_block(field_table(
            palette,
            &[
                [
                    "보유 인텐트 목록",
                    "해금된 인텐트 ID 리스트 (최대 3개)",
                    "Array<IntentID>",
                    "필수",
                    "인텐트 2.1",
                ],
                ["각 인텐트 ID", "인텐트 고유 식별자", "FName", "필수", "인텐트"],
                [
                    "각 인텐트 이름",
                    "인텐트 표시 이름",
                    "String",
                    "필수",
                    "인텐트",
                ],
                ["각 인텐트 아이콘", "인텐트 아이콘", "Texture2D", "필수", "인텐트"],
                [
                    "각 인텐트 설명",
                    "인텐트 효과 설명",
                    "String",
                    "권장",
                    "인텐트",
                ],
                [
                    "각 인텐트 실행 조건",
                    "실행 조건 텍스트",
                    "String",
                    "권장",
                    "인텐트 3.2",
                ],
                [
                    "각 인텐트 해금 상태",
                    "해금됨 / 미해금",
                    "Boolean",
                    "필수",
                    "인텐트 2.3",
                ],
                [
                    "인텐트 전환 상태",
                    "정상 / 전환 대기([X])",
                    "Enum",
                    "권장",
                    "인텐트 4.2.3",
                ],
            ],
        ))
        .build()
}

fn section_card_slots(palette: &Palette) -> Section {
    Section::builder("5. 캐릭터 카드 슬롯")
        .push_block(Block::subsection("5.1 슬롯 정보"))
        .push_block(field_table(
            palette,
            &[
                [
                    "카드 슬롯 수",
                    "해당 캐릭터의 해금된 슬롯 개수 (1~5)",
                    "Integer",
                    "필수",
                    "카드_시스템 6.1",
                ],
                [
                    "슬롯별 배치 카드 ID",
                    "각 슬롯에 배치된 카드 (없으면 null)",
                    "CardID or null",
                    "필수",
                    "카드_시스템 6.2",
                ],
                [
                    "슬롯별 배치 카드 정보",
                    "배치된 카드의 상세 정보",
                    "CardData",
                    "필수",
                    "카드_시스템",
                ],
                [
                    "슬롯 잠금 상태",
                    "슬롯별 해금/잠금 상태",
                    "Boolean",
                    "권장",
                    "카드_시스템 6.1",
                ],
            ],
        ))
        .push_block(Block::subsection("5.2 인챈트 슬롯 (카드 슬롯과 별개)"))
        .push_block(field_table(
            palette,
            &[
                [
                    "장착된 인챈트 목록",
                    "캐릭터에 장착된 인챈트 카드",
                    "Array<CardID>",
                    "필수",
                    "카드_시스템 4.3",
                ],
                [
                    "인챈트별 제거 비용",
                    "제거 시 필요한 AP",
                    "Integer",
                    "필수",
                    "카드_시스템 4.3",
                ],
            ],
        ))
        .build()
}

fn section_unique_resources(palette: &Palette) -> Section {
    Section::builder("6. 캐릭터 고유 자원")
        .start_on_new_page(true)
        .push_block(Block::subsection("6.1 에르나 전용"))
        .push_block(field_table(
            palette,
            &[
                [
                    "기억의 조각 현재 스택",
                    "현재 스택 수 (0~5)",
                    "Integer",
                    "필수",
                    "에르나 기획서",
                ],
                [
                    "기억의 조각 최대값",
                    "최대 스택 수 (5)",
                    "Integer",
                    "필수",
                    "에르나 기획서",
                ],
                [
                    "현재 무기 형태",
                    "대검 형태 / 대방패 형태",
                    "Enum",
                    "필수",
                    "에르나 기획서",
                ],
                [
                    "형태별 스탯 변화량",
                    "공격력/방어력 변화량",
                    "StatModifier",
                    "권장",
                    "에르나 기획서",
                ],
            ],
        ))
        .push_block(Block::subsection("6.2 범용 고유 자원 (향후 캐릭터 확장용)"))
        .push_block(field_table(
            palette,
            &[
                [
                    "고유 자원 보유 여부",
                    "해당 캐릭터가 고유 자원을 가지는지",
                    "Boolean",
                    "선택",
                    "인텐트 3.8.3",
                ],
                [
                    "고유 자원 이름",
                    "자원 표시 이름 (분노, 갈증, 집중 등)",
                    "String",
                    "선택",
                    "인텐트 3.8.3",
                ],
                [
                    "고유 자원 현재값",
                    "현재 축적량",
                    "Integer",
                    "선택",
                    "인텐트 3.8.3",
                ],
                [
                    "고유 자원 최대값",
                    "최대 축적량",
                    "Integer",
                    "선택",
                    "인텐트 3.8.3",
                ],
                [
                    "고유 자원 아이콘",
                    "자원 아이콘",
                    "Texture2D",
                    "선택",
                    "인텐트 3.8.3",
                ],
            ],
        ))
        .build()
}

fn section_enemy_units(palette: &Palette) -> Section {
    Section::builder("7. 적 유닛 정보")
        .push_block(Block::subsection("7.1 기본 스탯"))
        .push_block(field_table(
            palette,
            &[
                ["유닛 ID", "고유 식별자", "FName", "필수", "몬스터_AI"],
                ["유닛 이름", "표시 이름", "String", "필수", "몬스터_AI"],
                ["현재 HP", "현재 체력", "Integer", "필수", "몬스터_AI"],
                ["최대 HP", "최대 체력", "Integer", "필수", "몬스터_AI"],
                ["보호막", "현재 보호막 수치", "Integer", "권장", "몬스터_AI"],
                ["방어력", "현재 방어력", "Integer", "선택", "몬스터_AI"],
                [
                    "스피드",
                    "동시 발동 시 처리 순서",
                    "Integer",
                    "권장",
                    "턴_시스템 4.1",
                ],
                ["그리드 위치", "행, 열 좌표", "CellCoord", "필수", "반그리드"],
                [
                    "적 유형",
                    "일반몹 / 정예몹 / 보스",
                    "Enum",
                    "필수",
                    "인텐트 6.2",
                ],
                [
                    "유닛 크기",
                    "1x1 / 2x1 / 2x2",
                    "Enum",
                    "권장",
                    "반그리드 6.1",
                ],
                ["생존 상태", "생존 / 사망", "Enum", "필수", "몬스터_AI"],
            ],
        ))
        .push_block(Block::subsection("7.2 턴/인텐트"))
        .push_block(field_table(
            palette,
            &[
                ["턴 주기", "인텐트 행동 간격", "Integer", "필수", "턴_시스템"],
                [
                    "현재 턴 카운터",
                    "행동까지 남은 턴 수",
                    "Integer",
                    "필수",
                    "턴_시스템",
                ],
                [
                    "현재 인텐트 ID",
                    "현재 실행 예정 인텐트",
                    "FName",
                    "필수",
                    "인텐트 6.1",
                ],
                [
                    "현재 인텐트 아이콘",
                    "인텐트 아이콘",
                    "Texture2D",
                    "필수",
                    "인텐트 6.3.1",
                ],
                [
                    "인텐트 유형",
                    "공격/방어/회복/버프/디버프/소환/이동/특수",
                    "Enum",
                    "필수",
                    "인텐트 6.3.1",
                ],
                [
                    "예상 수치",
                    "예상 데미지/회복량/버프 수치",
                    "Integer",
                    "권장",
                    "인텐트",
                ],
                [
                    "실행 조건 충족 여부",
                    "조건 충족 / 불충족",
                    "Boolean",
                    "권장",
                    "인텐트",
                ],
            ],
        ))
        .build()
}

fn section_boss(palette: &Palette) -> Section {
    Section::builder("8. 보스 전용 정보")
        .start_on_new_page(true)
        .push_block(Block::subsection("8.1 페이즈 시스템"))
        .push_block(field_table(
            palette,
            &[
                [
                    "현재 페이즈",
                    "페이즈 번호 (1, 2, 3...)",
                    "Integer",
                    "필수",
                    "몬스터_AI",
                ],
                [
                    "총 페이즈 수",
                    "해당 보스의 총 페이즈 수",
                    "Integer",
                    "필수",
                    "몬스터_AI",
                ],
                [
                    "페이즈 전환 HP 임계값",
                    "다음 페이즈 전환 HP% (66%, 33% 등)",
                    "Float (%)",
                    "권장",
                    "몬스터_AI",
                ],
                [
                    "페이즈별 이름",
                    "각 페이즈 표시 이름",
                    "String",
                    "선택",
                    "몬스터_AI",
                ],
            ],
        ))
        .push_block(Block::subsection("8.2 인터럽트 시스템"))
        .push_block(field_table(
            palette,
            &[
                [
                    "인터럽트 가능 여부",
                    "현재 행동이 중단 가능한지",
                    "Boolean",
                    "권장",
                    "몬스터_AI",
                ],
                [
                    "인터럽트 진행도",
                    "중단 가능 행동의 현재 진행률",
                    "Float (0~100%)",
                    "권장",
                    "몬스터_AI",
                ],
                [
                    "인터럽트 조건",
                    "중단에 필요한 조건",
                    "String",
                    "선택",
                    "몬스터_AI",
                ],
            ],
        ))
        .build()
}

fn section_card_system(palette: &Palette) -> Section {
    Section::builder("9. 카드 시스템 정보")
        .push_block(Block::subsection("9.1 덱 상태"))
        .push_block(field_table(
            palette,
            &[
                [
                    "덱 남은 장수",
                    "현재 덱에 남은 카드 수",
                    "Integer",
                    "필수",
                    "카드_시스템 2.2",
                ],
                [
                    "덱 총 장수",
                    "덱 총 카드 수 (최대 40)",
                    "Integer",
                    "권장",
                    "카드_시스템 2.2",
                ],
                [
                    "덱 카드 목록",
                    "덱에 있는 카드 ID 리스트 (비공개)",
                    "Array<CardID>",
                    "선택",
                    "카드_시스템",
                ],
            ],
        ))
        .push_block(Block::subsection("9.2 묘지 (버린 카드 더미)"))
        .push_block(field_table(
            palette,
            &[
                [
                    "묘지 카드 수",
                    "버려진 카드 수",
                    "Integer",
                    "필수",
                    "카드_시스템 3.5",
                ],
                [
                    "묘지 카드 목록",
                    "버려진 카드 ID 리스트",
                    "Array<CardID>",
                    "권장",
                    "카드_시스템",
                ],
            ],
        ))
        .push_block(Block::subsection("9.3 핸드 상태"))
        .push_block(field_table(
            palette,
            &[
                [
                    "현재 핸드 장수",
                    "현재 보유 중인 카드 수 (0~5)",
                    "Integer",
                    "필수",
                    "카드_시스템 3.2",
                ],
                [
                    "최대 핸드 장수",
                    "핸드 제한 (기본 5)",
                    "Integer",
                    "필수",
                    "카드_시스템 3.2",
                ],
                [
                    "핸드 카드 목록",
                    "핸드에 있는 카드 ID 리스트",
                    "Array<CardID>",
                    "필수",
                    "카드_시스템",
                ],
                [
                    "버리기 예약 카드 목록",
                    "다음 턴에 버려질 카드 리스트",
                    "Array<CardID>",
                    "필수",
                    "카드_시스템 3.3",
                ],
            ],
        ))
        .push_block(Block::page_break())
        .push_block(Block::subsection("9.4 개별 카드 정보"))
        .push_block(field_table(
            palette,
            &[
                ["카드 ID", "고유 식별자", "FName", "필수", "카드_시스템"],
                ["카드 이름", "표시 이름", "String", "필수", "카드_시스템"],
                [
                    "카드 타입",
                    "액션 / 리액션 / 인챈트",
                    "Enum",
                    "필수",
                    "카드_시스템 4.1~4.3",
                ],
                [
                    "카드 아이콘/아트",
                    "카드 이미지 리소스",
                    "Texture2D",
                    "필수",
                    "카드_시스템",
                ],
                [
                    "AP 코스트",
                    "사용에 필요한 AP",
                    "Integer",
                    "필수",
                    "카드_시스템 5.1",
                ],
                [
                    "동적 코스트 여부",
                    "스탯에 따라 코스트 변동 여부",
                    "Boolean",
                    "권장",
                    "카드_시스템 8.2.1",
                ],
                [
                    "계산된 실제 코스트",
                    "현재 캐릭터 기준 실제 코스트",
                    "Integer",
                    "권장",
                    "카드_시스템 8.2.1",
                ],
                [
                    "카드 설명",
                    "효과 설명 텍스트",
                    "String",
                    "필수",
                    "카드_시스템",
                ],
                [
                    "사용 조건",
                    "사용 제한 조건 텍스트",
                    "String",
                    "권장",
                    "카드_시스템 8.2.3",
                ],
                [
                    "조건 충족 여부",
                    "현재 사용 가능 여부",
                    "Boolean",
                    "필수",
                    "카드_시스템",
                ],
            ],
        ))
        .build()
}

fn section_action_bar(palette: &Palette) -> Section {
    Section::builder("10. 행동 순서 (액션 바)")
        .push_block(Block::subsection("10.1 동시 발동 정보"))
        .push_block(field_table(
            palette,
            &[
                [
                    "동시 발동 유닛 목록",
                    "현재 턴에 인텐트 발동하는 유닛 리스트",
                    "Array<UnitID>",
                    "필수",
                    "턴_시스템 8.3",
                ],
                [
                    "발동 순서",
                    "스피드 기준 정렬된 순서",
                    "Array<{UnitID, Speed, Order}>",
                    "필수",
                    "턴_시스템 4.3",
                ],
                [
                    "현재 행동 중 유닛",
                    "현재 인텐트 실행 중인 유닛 ID",
                    "UnitID",
                    "필수",
                    "턴_시스템",
                ],
                [
                    "대기 중 유닛 목록",
                    "순서 대기 중인 유닛 리스트",
                    "Array<UnitID>",
                    "권장",
                    "턴_시스템",
                ],
            ],
        ))
        .push_block(Block::subsection("10.2 유닛별 행동 정보"))
        .push_block(field_table(
            palette,
            &[
                [
                    "유닛 아이콘",
                    "유닛 초상화/아이콘",
                    "Texture2D",
                    "필수",
                    "코어루프",
                ],
                [
                    "유닛 스피드",
                    "해당 유닛의 스피드 수치",
                    "Integer",
                    "권장",
                    "턴_시스템",
                ],
                ["유닛 진영", "아군 / 적군", "Enum", "필수", "코어루프"],
                [
                    "예상 행동",
                    "해당 유닛의 예상 행동 요약",
                    "String",
                    "선택",
                    "인텐트",
                ],
            ],
        ))
        .build()
}

fn section_floating_text(palette: &Palette) -> Section {
    Section::builder("11. 플로팅 텍스트 / 연출 데이터")
        .push_block(Block::subsection("11.1 데미지/회복 표시"))
        .push_block(field_table(
            palette,
            &[
                [
                    "데미지 수치",
                    "피격 시 표시할 데미지",
                    "Integer",
                    "필수",
                    "코어루프",
                ],
                [
                    "회복량 수치",
                    "회복 시 표시할 수치",
                    "Integer",
                    "필수",
                    "코어루프",
                ],
                [
                    "보호막 데미지",
                    "보호막에 적용된 데미지",
                    "Integer",
                    "권장",
                    "코어루프",
                ],
                [
                    "보호막 획득량",
                    "획득한 보호막 수치",
                    "Integer",
                    "권장",
                    "코어루프",
                ],
                [
                    "데미지 대상 유닛",
                    "데미지를 받은 유닛 ID",
                    "UnitID",
                    "필수",
                    "코어루프",
                ],
                [
                    "회복 대상 유닛",
                    "회복을 받은 유닛 ID",
                    "UnitID",
                    "필수",
                    "코어루프",
                ],
            ],
        ))
        .push_block(Block::subsection("11.2 크리티컬/특수 효과"))
        .push_block(field_table(
            palette,
            &[
                [
                    "크리티컬 발생 여부",
                    "크리티컬 히트 여부",
                    "Boolean",
                    "필수",
                    "코어루프",
                ],
                [
                    "크리티컬 배율",
                    "크리티컬 데미지 배율",
                    "Float",
                    "권장",
                    "코어루프",
                ],
                ["회피 발생 여부", "공격 회피 여부", "Boolean", "권장", "코어루프"],
                ["블록 발생 여부", "공격 블록 여부", "Boolean", "권장", "코어루프"],
                ["면역 여부", "효과 면역 여부", "Boolean", "권장", "턴_시스템"],
            ],
        ))
        .build()
}

fn section_combat_log(palette: &Palette) -> Section {
    Section::builder("12. 전투 로그")
        .start_on_new_page(true)
        .push_block(Block::subsection("12.1 행동 로그"))
        .push_block(field_table(
            palette,
            &[
                [
                    "최근 행동 로그 목록",
                    "최근 발생한 행동 기록 리스트",
                    "Array<ActionLog>",
                    "권장",
                    "코어루프",
                ],
                [
                    "로그 타임스탬프",
                    "행동 발생 시간",
                    "Float",
                    "권장",
                    "코어루프",
                ],
                [
                    "행동 주체",
                    "행동을 수행한 유닛 ID",
                    "UnitID",
                    "권장",
                    "코어루프",
                ],
                [
                    "행동 유형",
                    "공격/방어/스킬/이동 등",
                    "Enum",
                    "권장",
                    "코어루프",
                ],
                [
                    "행동 대상",
                    "행동 대상 유닛 ID 목록",
                    "Array<UnitID>",
                    "권장",
                    "코어루프",
                ],
                ["결과 수치", "데미지/회복량 등", "Integer", "권장", "코어루프"],
            ],
        ))
        .build()
}

fn section_results(palette: &Palette) -> Section {
    Section::builder("13. 전투 결과 화면")
        .push_block(Block::subsection("13.1 결과 정보"))
        .push_block(field_table(
            palette,
            &[
                ["전투 결과", "승리 / 패배", "Enum", "필수", "코어루프"],
                [
                    "경과 턴 수",
                    "전투에서 경과한 총 턴 수",
                    "Integer",
                    "권장",
                    "턴_시스템",
                ],
                [
                    "처치한 적 수",
                    "이번 전투에서 처치한 적 수",
                    "Integer",
                    "권장",
                    "코어루프",
                ],
                [
                    "사용한 카드 수",
                    "이번 전투에서 사용한 카드 수",
                    "Integer",
                    "선택",
                    "카드_시스템",
                ],
            ],
        ))
        .push_block(Block::subsection("13.2 파티 상태"))
        .push_block(field_table(
            palette,
            &[
                [
                    "생존 아군 목록",
                    "전투 후 생존한 아군",
                    "Array<UnitID>",
                    "필수",
                    "코어루프",
                ],
                [
                    "아군별 남은 HP",
                    "각 아군의 현재 HP",
                    "Integer per Unit",
                    "권장",
                    "코어루프",
                ],
                [
                    "사망 아군 목록",
                    "전투 중 사망한 아군",
                    "Array<UnitID>",
                    "권장",
                    "코어루프",
                ],
            ],
        ))
        .push_block(Block::subsection("13.3 보상 정보"))
        .push_block(field_table(
            palette,
            &[
                [
                    "획득 보상 목록",
                    "전투 종료 시 획득 보상",
                    "Array<RewardData>",
                    "필수",
                    "코어루프",
                ],
                [
                    "보상 유형",
                    "카드 / 골드 / 유물 / 기타",
                    "Enum",
                    "필수",
                    "코어루프",
                ],
                ["보상 ID", "획득한 보상 ID", "FName", "필수", "코어루프"],
                ["보상 이름", "획득한 보상 이름", "String", "필수", "코어루프"],
                ["보상 아이콘", "보상 아이콘", "Texture2D", "필수", "코어루프"],
                ["보상 수량", "획득 수량", "Integer", "필수", "코어루프"],
            ],
        ))
        .build()
}

fn section_additional_summary(palette: &Palette) -> Section {
    Section::builder("14~17. 추가 시스템 요약")
        .start_on_new_page(true)
        .push_block(Block::body("주요 추가 데이터 영역:"))
        .push_block(Block::spacer(3.0))
        .push_block(summary_table(palette))
        .push_block(Block::spacer(10.0))
        .build()
}

fn section_statistics(palette: &Palette) -> Section {
    Section::builder("데이터 요약 통계")
        .push_block(stats_table(palette))
        .push_block(Block::spacer(20.0))
        .build()
}

fn section_document_info(palette: &Palette) -> Section {
    Section::builder("문서 정보")
        .push_block(info_table(palette))
        .build()
}

/// Builds the complete document outline.
pub fn combat_ui_outline(palette: &Palette) -> Outline {
    Outline::new()
        .with_cover_blocks(cover_blocks(palette))
        .with_section(section_global(palette))
        .with_section(section_grid(palette))
        .with_section(section_ally_units(palette))
        .with_section(section_ally_intents(palette))
        .with_section(section_card_slots(palette))
        .with_section(section_unique_resources(palette))
        .with_section(section_enemy_units(palette))
        .with_section(section_boss(palette))
        .with_section(section_card_system(palette))
        .with_section(section_action_bar(palette))
        .with_section(section_floating_text(palette))
        .with_section(section_combat_log(palette))
        .with_section(section_results(palette))
        .with_section(section_additional_summary(palette))
        .with_section(section_statistics(palette))
        .with_section(section_document_info(palette))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    fn outline() -> Outline {
        combat_ui_outline(&Palette::default())
    }

    #[test]
    fn every_table_is_rectangular() {
        for spec in outline().tables() {
            assert!(
                spec.is_rectangular(),
                "ragged table with header {:?}",
                spec.header()
            );
        }
    }

    #[test]
    fn field_tables_carry_five_columns() {
        let field_header: Vec<_> = FIELD_HEADER.iter().map(|cell| cell.to_string()).collect();
        let mut seen = 0;
        for spec in outline().tables() {
            if spec.header() == field_header.as_slice() {
                assert_eq!(spec.columns().len(), 5);
                seen += 1;
            }
        }
        assert_eq!(seen, 32, "all per-field tables use the five-column header");
    }

    #[test]
    fn outline_contains_all_sections_in_order() {
        let outline = outline();
        let titles: Vec<_> = outline
            .sections()
            .iter()
            .map(|section| section.title())
            .collect();
        assert_eq!(titles.len(), 16);
        assert_eq!(titles[0], "1. 글로벌 전투 정보");
        assert_eq!(titles[12], "13. 전투 결과 화면");
        assert_eq!(titles[13], "14~17. 추가 시스템 요약");
        assert_eq!(titles[15], "문서 정보");
    }

    #[test]
    fn page_broken_sections_match_the_layout() {
        let outline = outline();
        let new_page_titles: Vec<_> = outline
            .sections()
            .iter()
            .filter(|section| section.starts_on_new_page())
            .map(|section| section.title())
            .collect();
        assert_eq!(
            new_page_titles,
            [
                "1. 글로벌 전투 정보",
                "3. 아군 유닛 정보",
                "4. 아군 인텐트 정보",
                "6. 캐릭터 고유 자원",
                "8. 보스 전용 정보",
                "12. 전투 로그",
                "14~17. 추가 시스템 요약",
            ]
        );
    }

    #[test]
    fn legend_rows_use_three_distinct_tier_colors() {
        let palette = Palette::default();
        let outline = combat_ui_outline(&palette);
        let legend = outline
            .cover()
            .iter()
            .find_map(|block| match block {
                Block::Table(spec) => Some(spec),
                _ => None,
            })
            .expect("cover carries the legend table");

        let mut colors = Vec::new();
        for row in 1..=3 {
            let patch = legend
                .patch_at(row, 0)
                .expect("every tier row is highlighted");
            let color = patch.background().expect("tier patches set a background");
            assert!(!colors.contains(&color), "tier colors must be distinct");
            colors.push(color);
        }
    }

    #[test]
    fn statistics_total_row_has_no_tier_color() {
        let palette = Palette::default();
        let outline = combat_ui_outline(&palette);
        let stats = outline
            .sections()
            .iter()
            .find(|section| section.title() == "데이터 요약 통계")
            .and_then(|section| {
                section.blocks().iter().find_map(|block| match block {
                    Block::Table(spec) => Some(spec),
                    _ => None,
                })
            })
            .expect("statistics table exists");

        // the total row falls through the classifier and keeps the cream
        // emphasis instead of a tier color
        let total = stats.patch_at(4, 0).expect("total row is emphasized");
        assert_eq!(total.background(), Some(palette.stripe_background));
        assert!(total.is_bold());
    }

    #[test]
    fn inline_page_break_precedes_individual_card_info() {
        let outline = outline();
        let cards = outline
            .sections()
            .iter()
            .find(|section| section.title() == "9. 카드 시스템 정보")
            .expect("card system section exists");
        let break_index = cards
            .blocks()
            .iter()
            .position(|block| matches!(block, Block::PageBreak))
            .expect("section 9 breaks before 9.4");
        match &cards.blocks()[break_index + 1] {
            Block::Text { content, .. } => assert!(content.starts_with("9.4")),
            other => panic!("expected the 9.4 heading after the break, got {:?}", other),
        }
    }
}
