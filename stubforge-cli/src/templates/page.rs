//! Default stubs for `make:page-component`

/// Page component, optionally with a mocked `asyncData` hook
pub const PAGE_VUE: &str = r#"<template>
    <div class="{{kebabName}}-page" ref="{{camelName}}">
    </div>
</template>

<script>
export default {
    name: '{{pascalName}}',
{{#if mockAsyncData}}

    async asyncData() {
        return {};
    },
{{/if}}

    head() {
        return {
            title: '{{pascalName}}',
        };
    },
};
</script>

<style lang="scss" scoped>
@import '{{rootPrefix}}assets/scss/variables';

.{{kebabName}}-page {
}
</style>
"#;

/// Unit test for the page
pub const PAGE_SPEC_JS: &str = r"import { shallowMount } from '@vue/test-utils';
import {{pascalName}} from './{{pascalName}}.vue';
import { defaultMocks } from '{{rootPrefix}}tests/mocks';

describe('{{pascalName}}', () => {
    const factory = (data = {}) => shallowMount({{pascalName}}, {
        data: () => data,
        mocks: defaultMocks,
    });

    it('renders the {{kebabName}} page', () => {
        const {{camelName}} = factory();

        expect({{camelName}}.classes()).toContain('{{kebabName}}-page');
    });
{{#if mockAsyncData}}

    it('resolves asyncData', async () => {
        const data = await {{pascalName}}.asyncData(defaultMocks);

        expect(data).toEqual({});
    });
{{/if}}
});
";

/// Storybook story for the page
pub const PAGE_STORIES_JS: &str = r"import {{pascalName}} from './{{pascalName}}.vue';

export default {
    title: 'Pages/{{pascalName}}',
    component: {{pascalName}},
};

export const {{camelName}} = () => ({
    components: { {{pascalName}} },
    template: '<{{kebabName}} />',
});
";
