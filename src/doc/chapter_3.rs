/*!
# Variables

Variables live after the program, from the address in `VARS` up to an
end marker of 128. The first byte of each variable holds the kind in its
top three bits and the letter of the name in its bottom five.

| Top bits | Kind | Shown as | Followed by |
|---|---|---|---|
| 011 | number | `a` | five byte value |
| 010 | string | `a$` | two byte length and the text |
| 101 | number with a long name | `count` | rest of the name, last letter with bit 7 set, then the value |
| 100 | array of numbers | `a()` | two byte length, dimension count, two bytes per dimension, the values |
| 110 | array of strings | `a$()` | as for numbers, the last dimension is the string length |
| 111 | `FOR` control variable | `a` | value, limit and step, two byte line number, statement number |

String array elements are shown with trailing spaces removed.

`DEF FN` definitions are not kept here. `VARS` finds them in the program
and shows them as `FN f(x,y)` with their line number and expression.

Memory that is being changed may not hold a complete variables area.
Decoding stops at anything it does not understand, or at a variable that
runs past the end of the area, and shows what came before.

*/
